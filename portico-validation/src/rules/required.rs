use super::FieldValidation;
use crate::ValidationError;

/// Rejects the empty string with [`ValidationError::RequiredField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldValidation {
    field_name: String,
}

impl RequiredFieldValidation {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &str) -> Option<ValidationError> {
        value.is_empty().then_some(ValidationError::RequiredField)
    }
}
