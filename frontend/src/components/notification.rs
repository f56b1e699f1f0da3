use crate::config::TOAST_DURATION_MS;
use crate::controllers::toast::{ToastAction, ToastState};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Handle for posting a toast from anywhere under `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<String>);

impl Notifier {
    pub fn notify(&self, message: impl Into<String>) {
        self.0.emit(message.into());
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| Notifier(Callback::noop()))
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toast = use_reducer(ToastState::default);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let notifier = {
        let toast = toast.clone();
        use_state(move || {
            Notifier(Callback::from(move |message: String| {
                toast.dispatch(ToastAction::Show(message));
            }))
        })
    };

    {
        let generation = toast.generation;
        let toast = toast.clone();
        let hide_timer = hide_timer.clone();
        use_effect_with_deps(
            move |generation| {
                let generation = *generation;
                if toast.visible {
                    let toast = toast.clone();
                    // Replacing the handle drops, and so cancels, the previous timer.
                    *hide_timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || {
                        toast.dispatch(ToastAction::Hide(generation));
                    }));
                }
                || ()
            },
            generation,
        );
    }

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <div
                id="toast"
                class={classes!("toast", toast.visible.then(|| "show"))}
                role="status"
                aria-live="polite"
            >
                { toast.message.clone() }
            </div>
        </ContextProvider<Notifier>>
    }
}
