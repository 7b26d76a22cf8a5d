use regex::Regex;

use super::FieldValidation;
use crate::ValidationError;

/// Rejects values that do not match a regular expression.
#[derive(Debug, Clone)]
pub struct PatternValidation {
    field_name: String,
    pattern: Regex,
}

impl PatternValidation {
    /// Compile `pattern` for `field_name`.
    pub fn new(field_name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::with_regex(field_name, Regex::new(pattern)?))
    }

    /// Use an already compiled expression.
    pub fn with_regex(field_name: impl Into<String>, pattern: Regex) -> Self {
        Self {
            field_name: field_name.into(),
            pattern,
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl FieldValidation for PatternValidation {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &str) -> Option<ValidationError> {
        (!self.pattern.is_match(value)).then_some(ValidationError::InvalidField)
    }
}
