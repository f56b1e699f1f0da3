use crate::error::FieldError;
use regex::Regex;
use std::sync::OnceLock;

pub const FIX_FIELDS: &str = "Please fix the highlighted fields.";
pub const ACKNOWLEDGED: &str = "Thanks! Your message is ready to send (connect backend to deliver).";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const ORDER: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }

    fn slot(&self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Phone => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Runs every rule; a failing field never hides the errors of the
    /// fields after it.
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::default();
        for field in Field::ORDER {
            if let Err(e) = check(field, self.value(field)) {
                validation.errors[field.slot()] = Some(e);
            }
        }
        validation
    }
}

pub fn check(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    match field {
        Field::FirstName if value.is_empty() => Err(FieldError::FirstNameRequired),
        Field::LastName if value.is_empty() => Err(FieldError::LastNameRequired),
        Field::Email if value.is_empty() => Err(FieldError::EmailRequired),
        Field::Email if !email_pattern().is_match(value) => Err(FieldError::EmailInvalid),
        Field::Phone if value.is_empty() => Err(FieldError::PhoneRequired),
        _ => Ok(()),
    }
}

/// Per-field outcome of one submission attempt; starts all-clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    errors: [Option<FieldError>; 4],
}

impl Validation {
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.slot()]
    }

    pub fn message(&self, field: Field) -> String {
        self.error(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }
}

/// Outcome of a submit: the toast to show and whether the fields reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub validation: Validation,
    pub notice: &'static str,
    pub clear: bool,
}

pub fn submit(form: &ContactForm) -> Submission {
    let validation = form.validate();
    if validation.is_valid() {
        // Delivery hooks in here once a backend exists.
        Submission { validation, notice: ACKNOWLEDGED, clear: true }
    } else {
        Submission { validation, notice: FIX_FIELDS, clear: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            phone: "123".into(),
            message: String::new(),
        }
    }

    #[test]
    fn empty_submission_flags_every_field() {
        let outcome = submit(&ContactForm::default());
        assert!(!outcome.clear);
        assert_eq!(outcome.notice, FIX_FIELDS);
        let v = outcome.validation;
        assert_eq!(v.error(Field::FirstName), Some(FieldError::FirstNameRequired));
        assert_eq!(v.error(Field::LastName), Some(FieldError::LastNameRequired));
        assert_eq!(v.error(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(v.error(Field::Phone), Some(FieldError::PhoneRequired));
    }

    #[test]
    fn complete_submission_is_acknowledged() {
        let outcome = submit(&filled());
        assert!(outcome.validation.is_valid());
        assert!(outcome.clear);
        assert_eq!(outcome.notice, ACKNOWLEDGED);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let mut form = filled();
        form.email = "bad-email".into();
        let v = form.validate();
        assert!(!v.is_valid());
        assert_eq!(v.error(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(v.message(Field::Email), "Please enter a valid email.");
        for field in [Field::FirstName, Field::LastName, Field::Phone] {
            assert_eq!(v.error(field), None);
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.phone = "   ".into();
        assert_eq!(form.validate().error(Field::Phone), Some(FieldError::PhoneRequired));
    }

    #[test]
    fn email_shape_rules() {
        assert!(check(Field::Email, " a@b.co ").is_ok());
        assert!(check(Field::Email, "a@b").is_err());
        assert!(check(Field::Email, "a b@c.d").is_err());
        assert!(check(Field::Email, "a@@b.c").is_err());
        assert!(check(Field::Phone, "not a number").is_ok());
    }
}
