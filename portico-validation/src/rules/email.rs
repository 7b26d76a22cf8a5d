use email_address::{EmailAddress, Options};

use super::FieldValidation;
use crate::ValidationError;

/// Rejects values that are not a bare, well-formed email address.
///
/// Display-name forms (`Ana <ana@example.com>`) and domain literals
/// (`ana@[127.0.0.1]`) are rejected.
///
/// The empty string passes; compose with
/// [`RequiredFieldValidation`](super::RequiredFieldValidation) to demand a
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailValidation {
    field_name: String,
}

impl EmailValidation {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

fn strict_options() -> Options {
    Options::default()
        .without_display_text()
        .without_domain_literal()
}

impl FieldValidation for EmailValidation {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &str) -> Option<ValidationError> {
        if value.is_empty() || EmailAddress::parse_with_options(value, strict_options()).is_ok() {
            None
        } else {
            Some(ValidationError::InvalidField)
        }
    }
}
