use crate::config::FAB_THRESHOLD_PX;

/// One scroll sample taken from the document element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    /// Progress bar width, 0..=100.
    pub percent: f64,
    pub fabs_shown: bool,
}

impl ScrollSample {
    pub fn percent(&self) -> f64 {
        let range = self.scroll_height - self.client_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range * 100.0).clamp(0.0, 100.0)
    }

    pub fn view(&self) -> ScrollView {
        ScrollView {
            percent: self.percent(),
            fabs_shown: self.scroll_top > FAB_THRESHOLD_PX,
        }
    }
}

/// What the section observer reported for one tracked section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSample {
    pub id: String,
    pub intersecting: bool,
    pub ratio: f64,
}

/// Id of the most visible intersecting section; the earliest sample wins a
/// tie. `None` means keep whatever is highlighted now.
pub fn most_visible(samples: &[SectionSample]) -> Option<&str> {
    let mut best: Option<&SectionSample> = None;
    for sample in samples.iter().filter(|s| s.intersecting) {
        match best {
            Some(current) if current.ratio >= sample.ratio => {}
            _ => best = Some(sample),
        }
    }
    best.map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(top: f64) -> ScrollSample {
        ScrollSample { scroll_top: top, scroll_height: 3000.0, client_height: 1000.0 }
    }

    fn section(id: &str, intersecting: bool, ratio: f64) -> SectionSample {
        SectionSample { id: id.to_string(), intersecting, ratio }
    }

    #[test]
    fn percent_tracks_scroll_range() {
        assert_eq!(sample(0.0).percent(), 0.0);
        assert_eq!(sample(1000.0).percent(), 50.0);
        assert_eq!(sample(2000.0).percent(), 100.0);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(sample(-40.0).percent(), 0.0);
        assert_eq!(sample(2600.0).percent(), 100.0);
    }

    #[test]
    fn short_document_reports_zero() {
        let short = ScrollSample { scroll_top: 0.0, scroll_height: 600.0, client_height: 900.0 };
        assert_eq!(short.percent(), 0.0);
        let exact = ScrollSample { scroll_top: 0.0, scroll_height: 900.0, client_height: 900.0 };
        assert!(!exact.percent().is_nan());
    }

    #[test]
    fn fabs_show_strictly_past_threshold() {
        assert!(!sample(480.0).view().fabs_shown);
        assert!(sample(481.0).view().fabs_shown);
        assert!(!sample(10.0).view().fabs_shown);
    }

    #[test]
    fn highest_ratio_wins() {
        let samples = vec![
            section("about", true, 0.3),
            section("services", true, 0.6),
            section("team", false, 0.9),
        ];
        assert_eq!(most_visible(&samples), Some("services"));
    }

    #[test]
    fn ties_go_to_the_first_sample() {
        let samples = vec![section("team", true, 0.4), section("benefits", true, 0.4)];
        assert_eq!(most_visible(&samples), Some("team"));
    }

    #[test]
    fn nothing_intersecting_keeps_previous() {
        let samples = vec![section("contact", false, 0.0)];
        assert_eq!(most_visible(&samples), None);
        assert_eq!(most_visible(&[]), None);
    }
}
