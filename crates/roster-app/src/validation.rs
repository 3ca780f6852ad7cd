//! Local field validation for user edits.
//!
//! Violations block the submission with a field-level message and never
//! reach the directory client.

use std::sync::LazyLock;

use regex::Regex;

/// Names: alphabetic characters and spaces only.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Emails: a simple `local@domain.tld` shape, nothing stricter.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Which field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Email address.
    Email,
}

impl Field {
    /// Human-readable field label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
        }
    }
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", field.label())]
pub struct ValidationError {
    /// The offending field.
    pub field: Field,
    /// Field-level message.
    pub message: &'static str,
}

/// Validate a name field.
pub fn validate_name(field: Field, value: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError {
            field,
            message: "only alphabets and spaces are allowed",
        })
    }
}

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError {
            field: Field::Email,
            message: "please enter a valid email address",
        })
    }
}
