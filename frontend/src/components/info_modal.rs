use super::modal::Modal;
use crate::controllers::dialog::DialogAction;
use crate::controllers::info::InfoView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoModalProps {
    pub view: Option<InfoView>,
    pub open: bool,
    pub on_action: Callback<DialogAction>,
}

#[function_component(InfoModal)]
pub fn info_modal(props: &InfoModalProps) -> Html {
    let content = match &props.view {
        Some(view) => html! {
            <>
                <p id="modalTag" class="modal-tag">{ view.detail.tag.clone() }</p>
                <h3 id="modalTitle">{ view.title.clone() }</h3>
                <p id="modalBody">{ view.detail.body.clone() }</p>
                <ul id="modalList">
                    { for view.detail.bullets.iter().map(|b| html! { <li>{ b.clone() }</li> }) }
                </ul>
            </>
        },
        None => html! {},
    };

    html! {
        <Modal id="infoModal" close_id="closeInfoModal" open={props.open} on_action={props.on_action.clone()}>
            { content }
        </Modal>
    }
}
