/// A single form field and its current verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    value: String,
    error: Option<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Validation error message, if the current value is rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub(crate) fn update(&mut self, value: String, error: Option<String>) {
        self.value = value;
        self.error = error;
    }
}
