use crate::content::ServiceCard;

pub const NO_MATCHES: &str = "No matches — try a different keyword.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Primary,
    Psychiatry,
    Wellness,
    Virtual,
    /// A chip carried a filter value this page does not know.
    Unknown,
}

impl Category {
    pub const CHIPS: [Category; 5] = [
        Category::All,
        Category::Primary,
        Category::Psychiatry,
        Category::Wellness,
        Category::Virtual,
    ];

    pub fn from_filter(value: &str) -> Self {
        match value {
            "" | "all" => Category::All,
            "primary" => Category::Primary,
            "psychiatry" => Category::Psychiatry,
            "wellness" => Category::Wellness,
            "virtual" => Category::Virtual,
            _ => Category::Unknown,
        }
    }

    pub fn filter_value(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Primary => "primary",
            Category::Psychiatry => "psychiatry",
            Category::Wellness => "wellness",
            Category::Virtual => "virtual",
            Category::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Primary => "Primary Care",
            Category::Psychiatry => "Psychiatry",
            Category::Wellness => "Wellness",
            Category::Virtual => "Virtual",
            Category::Unknown => "",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::All | Category::Unknown => &[],
            Category::Primary => &[
                "primary", "physical", "preventive", "checkup", "chronic", "disease",
                "diabetes", "thyroid", "heart", "hypertension", "management",
            ],
            Category::Psychiatry => &[
                "psychiatry", "psychotherapy", "therapy", "counseling", "medication",
                "evaluation", "anxiety", "depression", "trauma",
            ],
            Category::Wellness => &[
                "wellness", "lifestyle", "weight", "loss", "iv", "hydration", "vitamins",
                "recovery", "coaching", "fatigue",
            ],
            Category::Virtual => &["telemedicine", "virtual", "online", "follow-up"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub category: Category,
    pub query: String,
}

impl FilterState {
    pub fn with_query(&self, query: String) -> Self {
        FilterState { query, ..self.clone() }
    }

    pub fn with_category(&self, category: Category) -> Self {
        FilterState { category, ..self.clone() }
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// `text` is what the card shows, `tags` its tag string.
    pub fn matches(&self, text: &str, tags: &str) -> bool {
        let text = text.to_lowercase();
        let tags = tags.to_lowercase();
        let q = self.normalized_query();

        let query_ok = q.is_empty() || text.contains(&q) || tags.contains(&q);
        if self.category == Category::All {
            return query_ok;
        }
        let category_ok = self.category.keywords().iter().any(|k| tags.contains(k));
        query_ok && category_ok
    }

    pub fn shows(&self, card: &ServiceCard) -> bool {
        self.matches(&card.visible_text(), &card.tags)
    }

    /// Full re-scan: one visibility flag per card, in order.
    pub fn visibility(&self, cards: &[ServiceCard]) -> Vec<bool> {
        cards.iter().map(|card| self.shows(card)).collect()
    }

    /// The empty-result toast is for searches only; a chip that empties the
    /// grid with no text typed stays quiet.
    pub fn should_notify(&self, shown: usize) -> bool {
        shown == 0 && !self.normalized_query().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, tags: &str) -> ServiceCard {
        ServiceCard {
            title: title.to_string(),
            blurb: String::new(),
            tags: tags.to_string(),
        }
    }

    fn fixtures() -> Vec<ServiceCard> {
        vec![
            card("Primary Care", "primary chronic diabetes"),
            card("Behavioral Health", "psychiatry therapy medication"),
            card("IV Lounge", "wellness iv hydration"),
            card("Video Visits", "telemedicine online follow-up"),
        ]
    }

    fn shown_titles(state: &FilterState) -> Vec<String> {
        fixtures()
            .into_iter()
            .filter(|c| state.shows(c))
            .map(|c| c.title)
            .collect()
    }

    #[test]
    fn default_state_shows_everything() {
        assert_eq!(FilterState::default().visibility(&fixtures()), vec![true; 4]);
    }

    #[test]
    fn each_category_selects_its_card() {
        let base = FilterState::default();
        assert_eq!(shown_titles(&base.with_category(Category::Primary)), vec!["Primary Care"]);
        assert_eq!(shown_titles(&base.with_category(Category::Psychiatry)), vec!["Behavioral Health"]);
        assert_eq!(shown_titles(&base.with_category(Category::Wellness)), vec!["IV Lounge"]);
        assert_eq!(shown_titles(&base.with_category(Category::Virtual)), vec!["Video Visits"]);
    }

    #[test]
    fn query_matches_text_or_tags_case_insensitively() {
        let state = FilterState::default().with_query("  VIDEO ".into());
        assert_eq!(shown_titles(&state), vec!["Video Visits"]);
        let state = FilterState::default().with_query("Hydration".into());
        assert_eq!(shown_titles(&state), vec!["IV Lounge"]);
    }

    #[test]
    fn query_and_category_must_both_hold() {
        let state = FilterState::default()
            .with_category(Category::Psychiatry)
            .with_query("diabetes".into());
        assert!(shown_titles(&state).is_empty());
        assert!(state.should_notify(0));
    }

    #[test]
    fn category_only_empty_result_does_not_notify() {
        let state = FilterState::default().with_category(Category::Unknown);
        assert!(shown_titles(&state).is_empty());
        assert!(!state.should_notify(0));
        assert!(!FilterState::default().with_query("   ".into()).should_notify(0));
    }

    #[test]
    fn filter_values_round_trip_through_chips() {
        for chip in Category::CHIPS {
            assert_eq!(Category::from_filter(chip.filter_value()), chip);
        }
        assert_eq!(Category::from_filter("training"), Category::Unknown);
    }
}
