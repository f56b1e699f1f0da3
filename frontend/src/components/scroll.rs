use crate::controllers::scroll::ScrollView;
use crate::dom::scroll::{sample, scroll_to_top, PassiveListener};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollTrackerProps {
    pub on_schedule: Callback<()>,
}

fn current_view() -> ScrollView {
    sample()
        .map(|s| s.view())
        .unwrap_or(ScrollView { percent: 0.0, fabs_shown: false })
}

fn fab_style(shown: bool) -> &'static str {
    if shown { "display: inline-flex;" } else { "display: none;" }
}

/// Progress bar plus the schedule and back-to-top floating buttons.
#[function_component(ScrollTracker)]
pub fn scroll_tracker(props: &ScrollTrackerProps) -> Html {
    let view = use_state_eq(current_view);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let setter = view.setter();
                // Initial sample, then one per scroll event.
                setter.set(current_view());
                let listener = match PassiveListener::on_window("scroll", move || setter.set(current_view())) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::debug!("scroll tracking disabled: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    let open_schedule = {
        let on_schedule = props.on_schedule.clone();
        Callback::from(move |_: MouseEvent| on_schedule.emit(()))
    };

    html! {
        <>
            <div class="progress" aria-hidden="true">
                <div id="progressBar" class="progress-bar" style={format!("width: {}%;", view.percent)}></div>
            </div>
            <button
                id="fabSchedule"
                class="fab fab-schedule"
                style={fab_style(view.fabs_shown)}
                onclick={open_schedule}
            >
                {"Schedule"}
            </button>
            <button
                id="toTop"
                class="fab fab-top"
                style={fab_style(view.fabs_shown)}
                aria-label="Back to top"
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
            >
                {"↑"}
            </button>
        </>
    }
}
