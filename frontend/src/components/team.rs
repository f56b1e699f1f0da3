use crate::content::Practitioner;
use crate::dom::dialog::target_is_control;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PractitionerCardProps {
    pub person: Practitioner,
    pub on_open: Callback<String>,
}

/// The whole card opens the bio; its own button and links keep their
/// behaviour.
#[function_component(PractitionerCard)]
pub fn practitioner_card(props: &PractitionerCardProps) -> Html {
    let on_card_click = {
        let on_open = props.on_open.clone();
        let title = props.person.open.clone();
        Callback::from(move |e: MouseEvent| {
            if target_is_control(&e) {
                return;
            }
            on_open.emit(title.clone());
        })
    };

    let on_button_click = {
        let on_open = props.on_open.clone();
        let title = props.person.open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(title.clone()))
    };

    html! {
        <article class="profile" style="cursor: pointer;" onclick={on_card_click}>
            <h3>{ props.person.name.clone() }</h3>
            <p class="profile-role">{ props.person.role.clone() }</p>
            <button class="btn btn-ghost" data-open={props.person.open.clone()} onclick={on_button_click}>
                {"Read bio"}
            </button>
        </article>
    }
}
