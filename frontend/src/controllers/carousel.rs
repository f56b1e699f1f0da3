use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Cyclic index over a fixed testimonial list, with an optional in-flight
/// fade. `index` is always in `0..len` (or 0 for an empty list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
    pub fading: bool,
    /// Index the running fade will land on.
    pub pending: Option<usize>,
}

pub enum CarouselAction {
    /// Step immediately, no fade.
    Jump(Direction),
    /// Start the fade toward the neighbour; a timer commits it with `Settle`.
    Fade(Direction),
    Settle(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        CarouselState { index: 0, len, fading: false, pending: None }
    }

    pub fn step(&self, direction: Direction) -> usize {
        if self.len == 0 {
            return 0;
        }
        match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Previous => (self.index + self.len - 1) % self.len,
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Jump(direction) => CarouselState {
                index: self.step(direction),
                fading: false,
                pending: None,
                ..*self
            },
            CarouselAction::Fade(direction) => CarouselState {
                fading: true,
                pending: Some(self.step(direction)),
                ..*self
            },
            CarouselAction::Settle(target) => CarouselState {
                index: if self.len == 0 { 0 } else { target % self.len },
                fading: false,
                pending: None,
                ..*self
            },
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(direction: Direction, n: usize) -> usize {
        let mut state = Rc::new(CarouselState::new(3));
        for _ in 0..n {
            state = state.reduce(CarouselAction::Jump(direction));
        }
        state.index
    }

    #[test]
    fn next_wraps_forward() {
        for n in 0..10 {
            assert_eq!(run(Direction::Next, n), n % 3);
        }
    }

    #[test]
    fn previous_wraps_backward() {
        for n in 0..10 {
            assert_eq!(run(Direction::Previous, n), (3 - n % 3) % 3);
        }
    }

    #[test]
    fn fade_holds_index_until_settled() {
        let state = Rc::new(CarouselState::new(3)).reduce(CarouselAction::Fade(Direction::Next));
        assert!(state.fading);
        assert_eq!(state.index, 0);
        assert_eq!(state.pending, Some(1));

        let state = state.reduce(CarouselAction::Settle(1));
        assert_eq!(state.index, 1);
        assert!(!state.fading);
        assert_eq!(state.pending, None);
    }

    #[test]
    fn overlapping_fades_last_write_wins() {
        let state = Rc::new(CarouselState::new(3))
            .reduce(CarouselAction::Fade(Direction::Next))
            .reduce(CarouselAction::Fade(Direction::Previous));
        assert_eq!(state.pending, Some(2));
        let state = state.reduce(CarouselAction::Settle(1)).reduce(CarouselAction::Settle(2));
        assert_eq!(state.index, 2);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let state = Rc::new(CarouselState::new(0)).reduce(CarouselAction::Jump(Direction::Previous));
        assert_eq!(state.index, 0);
    }
}
