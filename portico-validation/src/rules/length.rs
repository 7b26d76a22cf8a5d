//! Length bounds, counted in characters.

use super::FieldValidation;
use crate::ValidationError;

/// Rejects values shorter than `min` characters.
///
/// A value of exactly `min` characters is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLengthValidation {
    field_name: String,
    min: usize,
}

impl MinLengthValidation {
    pub fn new(field_name: impl Into<String>, min: usize) -> Self {
        Self {
            field_name: field_name.into(),
            min,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

impl FieldValidation for MinLengthValidation {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &str) -> Option<ValidationError> {
        (value.chars().count() < self.min).then_some(ValidationError::InvalidField)
    }
}

/// Rejects values longer than `max` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLengthValidation {
    field_name: String,
    max: usize,
}

impl MaxLengthValidation {
    pub fn new(field_name: impl Into<String>, max: usize) -> Self {
        Self {
            field_name: field_name.into(),
            max,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl FieldValidation for MaxLengthValidation {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &str) -> Option<ValidationError> {
        (value.chars().count() > self.max).then_some(ValidationError::InvalidField)
    }
}
