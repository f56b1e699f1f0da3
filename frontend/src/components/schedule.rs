use super::modal::Modal;
use crate::config::CONTACT_EMAIL;
use crate::controllers::dialog::DialogAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
    pub open: bool,
    pub on_action: Callback<DialogAction>,
}

#[function_component(ScheduleModal)]
pub fn schedule_modal(props: &ScheduleModalProps) -> Html {
    html! {
        <Modal id="scheduleModal" close_id="closeScheduleModal" open={props.open} on_action={props.on_action.clone()}>
            <p class="modal-tag">{"Appointments"}</p>
            <h3>{"Schedule a visit"}</h3>
            <p>{"In-person and virtual appointments are available on weekdays, with limited evening slots."}</p>
            <ul>
                <li>{"Call the office to book or reschedule"}</li>
                <li>{"Email us with your preferred days and times"}</li>
                <li>{"New patients: bring a photo ID and insurance card"}</li>
            </ul>
            <a class="btn" href={format!("mailto:{}", CONTACT_EMAIL)}>{"Email the office"}</a>
        </Modal>
    }
}
