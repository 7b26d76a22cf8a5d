//! Validation error kinds

/// Why a field value was rejected.
///
/// Errors are plain values: two errors are equal when their kinds are equal.
/// Each kind carries a fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// The field has no value.
    #[error("Required field")]
    RequiredField,

    /// The value is present but malformed (format or length).
    #[error("Invalid value")]
    InvalidField,
}

impl ValidationError {
    /// Stable identifier for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::RequiredField => "required_field",
            Self::InvalidField => "invalid_field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed_per_kind() {
        assert_eq!(ValidationError::RequiredField.to_string(), "Required field");
        assert_eq!(ValidationError::InvalidField.to_string(), "Invalid value");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValidationError::RequiredField.kind_name(), "required_field");
        assert_eq!(ValidationError::InvalidField.kind_name(), "invalid_field");
    }
}
