use thiserror::Error;

/// A failed contact-form rule. The `Display` text is what the page shows
/// under the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name is required.")]
    FirstNameRequired,
    #[error("Last name is required.")]
    LastNameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email.")]
    EmailInvalid,
    #[error("Phone is required.")]
    PhoneRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available in this context")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(js_reason(&value))
    }
}

/// Best-effort string form of a rejected promise or thrown value.
pub fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_render_inline_messages() {
        assert_eq!(FieldError::FirstNameRequired.to_string(), "First name is required.");
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email.");
        assert_eq!(FieldError::PhoneRequired.to_string(), "Phone is required.");
    }

    #[test]
    fn clipboard_rejection_carries_reason() {
        let err = ClipboardError::Rejected("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "clipboard write rejected: NotAllowedError");
    }
}
