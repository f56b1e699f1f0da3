use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub open: bool,
}

pub enum NavAction {
    Toggle,
    /// A navigation link was followed.
    LinkClicked,
    /// Any click on the page; `inside_menu` is true when its target sits
    /// within the toggle or the menu.
    DocumentClick { inside_menu: bool },
}

impl NavState {
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Toggle => Rc::new(NavState { open: !self.open }),
            NavAction::LinkClicked if self.open => Rc::new(NavState { open: false }),
            NavAction::DocumentClick { inside_menu: false } if self.open => {
                Rc::new(NavState { open: false })
            }
            // Already closed, or the click was on the menu itself; hand back
            // the same state so nothing re-renders.
            NavAction::LinkClicked | NavAction::DocumentClick { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_mirrors_aria() {
        let s = Rc::new(NavState::default()).reduce(NavAction::Toggle);
        assert!(s.open);
        assert_eq!(s.aria_expanded(), "true");
        let s = s.reduce(NavAction::Toggle);
        assert!(!s.open);
        assert_eq!(s.aria_expanded(), "false");
    }

    #[test]
    fn link_and_outside_clicks_force_close() {
        let open = Rc::new(NavState { open: true });
        assert!(!open.clone().reduce(NavAction::LinkClicked).open);
        assert!(!open.reduce(NavAction::DocumentClick { inside_menu: false }).open);
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let closed = Rc::new(NavState::default());
        let after = closed.clone().reduce(NavAction::DocumentClick { inside_menu: false });
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn clicks_inside_the_menu_keep_it_open() {
        let open = Rc::new(NavState { open: true });
        let after = open.clone().reduce(NavAction::DocumentClick { inside_menu: true });
        assert!(after.open);
        assert!(Rc::ptr_eq(&open, &after));
    }
}
