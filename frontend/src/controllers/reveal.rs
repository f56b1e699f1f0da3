/// One-shot visibility latch for a reveal element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one observation. Returns true only on the transition to visible,
    /// which is the caller's cue to stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        for intersecting in [false, true, false, true] {
            assert!(!latch.observe(intersecting));
            assert!(latch.is_visible());
        }
    }
}
