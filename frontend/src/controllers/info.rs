use crate::content::Detail;
use std::collections::HashMap;

pub const PLACEHOLDER_BODY: &str = "Details coming soon.";

pub fn placeholder() -> Detail {
    Detail {
        tag: String::new(),
        body: PLACEHOLDER_BODY.to_string(),
        bullets: Vec::new(),
    }
}

/// What the info dialog shows. Built fresh for every open so the bullet
/// list never carries over from the previous entry.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoView {
    pub title: String,
    pub detail: Detail,
}

impl InfoView {
    pub fn lookup(details: &HashMap<String, Detail>, title: &str) -> Self {
        let detail = details.get(title).cloned().unwrap_or_else(placeholder);
        InfoView {
            title: title.to_string(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HashMap<String, Detail> {
        let mut details = HashMap::new();
        details.insert(
            "Telemedicine".to_string(),
            Detail {
                tag: "Virtual".to_string(),
                body: "Secure visits.".to_string(),
                bullets: vec!["From home".to_string()],
            },
        );
        details
    }

    #[test]
    fn known_title_uses_its_entry() {
        let view = InfoView::lookup(&table(), "Telemedicine");
        assert_eq!(view.title, "Telemedicine");
        assert_eq!(view.detail.tag, "Virtual");
        assert_eq!(view.detail.bullets, vec!["From home"]);
    }

    #[test]
    fn unknown_title_falls_back_to_placeholder() {
        let view = InfoView::lookup(&table(), "Acupuncture");
        assert_eq!(view.title, "Acupuncture");
        assert_eq!(view.detail.tag, "");
        assert_eq!(view.detail.body, "Details coming soon.");
        assert!(view.detail.bullets.is_empty());
    }
}
