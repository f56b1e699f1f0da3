use crate::controllers::dialog::DialogAction;
use crate::dom::dialog::{hide, show, target_within};
use web_sys::{Element, HtmlDialogElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub close_id: AttrValue,
    pub open: bool,
    pub on_action: Callback<DialogAction>,
    #[prop_or_default]
    pub children: Children,
}

/// Native `<dialog>` driven by `open`. Clicks whose target falls outside
/// the content card dismiss it; so does anything that closes the dialog
/// natively (Escape).
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let dialog_ref = use_node_ref();
    let card_ref = use_node_ref();

    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                    if *open {
                        show(&dialog);
                    } else {
                        hide(&dialog);
                    }
                }
                || ()
            },
            props.open,
        );
    }

    let on_surface_click = {
        let card_ref = card_ref.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            // No card to measure against means nothing to dismiss.
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let inside_content = target_within(&card, &e);
            on_action.emit(DialogAction::SurfaceClick { inside_content });
        })
    };

    let on_native_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: Event| on_action.emit(DialogAction::Close))
    };

    let on_close_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(DialogAction::Close))
    };

    html! {
        <dialog
            id={props.id.clone()}
            ref={dialog_ref}
            class="modal"
            onclick={on_surface_click}
            onclose={on_native_close}
        >
            <div ref={card_ref} class="modal-card">
                <button id={props.close_id.clone()} class="modal-close" aria-label="Close" onclick={on_close_click}>
                    {"×"}
                </button>
                { for props.children.iter() }
            </div>
        </dialog>
    }
}
