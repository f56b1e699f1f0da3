use std::rc::Rc;
use yew::functional::Reducible;

/// Single-slot toast. Every `Show` bumps the generation; a `Hide` carrying a
/// stale generation is ignored, so only the timer of the latest message can
/// take it down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    pub generation: u64,
}

pub enum ToastAction {
    Show(String),
    Hide(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => Rc::new(ToastState {
                message,
                visible: true,
                generation: self.generation + 1,
            }),
            ToastAction::Hide(generation) if generation == self.generation && self.visible => {
                Rc::new(ToastState {
                    visible: false,
                    ..(*self).clone()
                })
            }
            ToastAction::Hide(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<ToastState>, action: ToastAction) -> Rc<ToastState> {
        state.reduce(action)
    }

    #[test]
    fn show_then_hide() {
        let s = apply(Rc::new(ToastState::default()), ToastAction::Show("hi".into()));
        assert!(s.visible);
        assert_eq!(s.message, "hi");
        let s = apply(s.clone(), ToastAction::Hide(s.generation));
        assert!(!s.visible);
        assert_eq!(s.message, "hi");
    }

    #[test]
    fn latest_message_wins_over_pending_hide() {
        let first = apply(Rc::new(ToastState::default()), ToastAction::Show("one".into()));
        let stale = first.generation;
        let second = apply(first, ToastAction::Show("two".into()));
        let after = apply(second, ToastAction::Hide(stale));
        assert!(after.visible);
        assert_eq!(after.message, "two");
    }
}
