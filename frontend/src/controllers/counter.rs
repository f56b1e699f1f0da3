use crate::config::COUNT_DURATION_MS;

/// Fraction of the count-up that has elapsed, 0..=1.
pub fn progress(elapsed_ms: f64) -> f64 {
    if elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / COUNT_DURATION_MS).min(1.0)
}

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Displayed value `elapsed_ms` after the animation started.
pub fn value_at(target: u32, elapsed_ms: f64) -> u32 {
    let eased = ease_out_cubic(progress(elapsed_ms));
    // eased stays within 0..=1 so the product never exceeds target.
    (f64::from(target) * eased).round() as u32
}

pub fn is_finished(elapsed_ms: f64) -> bool {
    progress(elapsed_ms) >= 1.0
}

/// Fires once, then stays spent. Each stat group owns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatTrigger {
    fired: bool,
}

impl StatTrigger {
    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// `any_intersecting` is true when at least one entry in the batch
    /// crossed the threshold. Returns true if the counters should start now.
    pub fn observe(&mut self, any_intersecting: bool) -> bool {
        if self.fired || !any_intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

/// The element whose visibility starts a stat group: its enclosing
/// section, or the row itself when it sits outside any section.
pub fn trigger_region<T>(section: Option<T>, row: T) -> T {
    section.unwrap_or(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(value_at(120, 0.0), 0);
        assert_eq!(value_at(120, 900.0), 120);
        assert_eq!(value_at(120, 5_000.0), 120);
        assert!(is_finished(900.0));
        assert!(!is_finished(899.0));
    }

    #[test]
    fn count_up_is_monotonic() {
        let mut last = 0;
        let mut t = 0.0;
        while t <= 1_000.0 {
            let v = value_at(120, t);
            assert!(v >= last, "dropped from {} to {} at {}ms", last, v, t);
            assert!(v <= 120);
            last = v;
            t += 16.7;
        }
        assert_eq!(last, 120);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(value_at(100, 450.0) > 50);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn trigger_watches_the_enclosing_section() {
        assert_eq!(trigger_region(Some("about"), "stats-row"), "about");
        assert_eq!(trigger_region(None, "stats-row"), "stats-row");
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = StatTrigger::default();
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(trigger.fired());
    }
}
