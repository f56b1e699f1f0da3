use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const SITE_JSON: &str = include_str!("../content/site.json");

static SITE: OnceLock<SiteContent> = OnceLock::new();

/// Label of the button on every service card.
pub const LEARN_MORE: &str = "Learn more";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    pub blurb: String,
    pub tags: String,
}

impl ServiceCard {
    /// Everything a visitor can read on the card, used for text search.
    pub fn visible_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.blurb, LEARN_MORE)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Practitioner {
    pub name: String,
    pub role: String,
    /// Title of the detail entry this card opens.
    pub open: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Detail {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub meta: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub count: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub services: Vec<ServiceCard>,
    #[serde(default)]
    pub practitioners: Vec<Practitioner>,
    #[serde(default)]
    pub details: HashMap<String, Detail>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Static page content, parsed on first use. A broken bundle degrades to an
/// empty page rather than a panic.
pub fn site() -> &'static SiteContent {
    SITE.get_or_init(|| match SiteContent::parse(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to parse bundled site content: {}", e);
            SiteContent::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::parse(SITE_JSON).expect("bundled json is valid");
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.practitioners.len(), 2);
        assert!(content.details.contains_key("Meet Abu"));
    }

    #[test]
    fn every_card_has_a_detail_entry() {
        let content = SiteContent::parse(SITE_JSON).expect("bundled json is valid");
        for card in &content.services {
            assert!(content.details.contains_key(&card.title), "missing {}", card.title);
        }
        for person in &content.practitioners {
            assert!(content.details.contains_key(&person.open), "missing {}", person.open);
        }
    }

    #[test]
    fn card_text_includes_its_button_label() {
        let card = ServiceCard {
            title: "Telemedicine".into(),
            blurb: "Visits from home.".into(),
            tags: String::new(),
        };
        let text = card.visible_text();
        assert!(text.starts_with("Telemedicine\nVisits from home."));
        assert!(text.ends_with(LEARN_MORE));
    }

    #[test]
    fn detail_fields_default_when_absent() {
        let content = SiteContent::parse(r#"{"details": {"X": {"body": "b"}}}"#).unwrap();
        let detail = &content.details["X"];
        assert_eq!(detail.tag, "");
        assert!(detail.bullets.is_empty());
        assert!(content.services.is_empty());
    }
}
