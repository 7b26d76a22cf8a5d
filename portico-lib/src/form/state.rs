use super::FormField;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// No input yet; fields carry their initial verdicts.
    #[default]
    Pristine,
    /// At least one field changed.
    Editing,
    /// An authentication call is in flight.
    Submitting,
    /// The last authentication (or token hand-off) failed.
    Errored,
    /// Authentication succeeded and the token was handed off.
    Succeeded,
}

/// Snapshot of everything the login form knows.
///
/// Only [`LoginForm`](super::LoginForm) mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
    phase: FormPhase,
    is_submitting: bool,
    main_error: Option<String>,
}

impl FormState {
    pub(crate) fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            phase: FormPhase::Pristine,
            is_submitting: false,
            main_error: None,
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Top-level error shown above the form.
    pub fn main_error(&self) -> Option<&str> {
        self.main_error.as_deref()
    }

    /// `true` when no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FormField::is_valid)
    }

    /// `true` when every field is valid and no request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.is_valid()
    }

    pub(crate) fn set_phase(&mut self, phase: FormPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_submitting(&mut self, is_submitting: bool) {
        self.is_submitting = is_submitting;
    }

    pub(crate) fn set_main_error(&mut self, main_error: Option<String>) {
        self.main_error = main_error;
    }
}
