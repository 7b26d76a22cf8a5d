//! Field rules.
//!
//! Each rule is a pure predicate over one field's string value. Rules never
//! panic and never mutate their configuration; "valid" is `None`.

mod email;
mod length;
mod pattern;
mod required;

pub use email::EmailValidation;
pub use length::{MaxLengthValidation, MinLengthValidation};
pub use pattern::PatternValidation;
pub use required::RequiredFieldValidation;

use crate::ValidationError;

/// A single validation rule bound to a field.
pub trait FieldValidation: Send + Sync {
    /// Name of the field this rule applies to.
    fn field_name(&self) -> &str;

    /// Check a value, returning the error if it is rejected.
    fn validate(&self, value: &str) -> Option<ValidationError>;
}
