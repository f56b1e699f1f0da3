use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogState {
    pub open: bool,
}

pub enum DialogAction {
    Open,
    Close,
    /// A click on the dialog surface. `inside_content` says whether the
    /// click target sits inside the content card.
    SurfaceClick { inside_content: bool },
}

impl Reducible for DialogState {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            DialogAction::Open => true,
            DialogAction::Close => false,
            DialogAction::SurfaceClick { inside_content } => self.open && inside_content,
        };
        if open == self.open {
            self
        } else {
            Rc::new(DialogState { open })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_dismisses() {
        let open = Rc::new(DialogState::default()).reduce(DialogAction::Open);
        assert!(open.open);
        let closed = open.reduce(DialogAction::SurfaceClick { inside_content: false });
        assert!(!closed.open);
    }

    #[test]
    fn click_inside_card_keeps_it_open() {
        let open = Rc::new(DialogState { open: true });
        assert!(open.reduce(DialogAction::SurfaceClick { inside_content: true }).open);
    }

    #[test]
    fn repeated_open_from_several_triggers_is_idempotent() {
        let open = Rc::new(DialogState { open: true });
        let again = open.clone().reduce(DialogAction::Open);
        assert!(Rc::ptr_eq(&open, &again));
        assert!(!again.reduce(DialogAction::Close).open);
    }
}
