//! Transition function of the login form.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use portico_validation::Validation;

use super::{FormField, FormPhase, FormState, FormView};
use crate::auth::{AccountModel, AuthenticationParams};
use crate::storage::ACCESS_TOKEN_KEY;

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

/// Something that happened to the form.
///
/// `Debug` output redacts the value of the password field.
#[derive(Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field.
    FieldChanged { field: String, value: String },
    /// The user asked to submit.
    Submit,
    /// The authentication call returned an account.
    AuthSucceeded(AccountModel),
    /// The authentication call failed with this user-facing message.
    AuthFailed(String),
    /// Handing the token to storage failed with this message.
    PersistFailed(String),
}

impl FormEvent {
    pub fn field_changed(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldChanged { field, value } => {
                let value: &dyn fmt::Debug = if field == PASSWORD_FIELD {
                    &"<redacted>"
                } else {
                    value
                };
                f.debug_struct("FieldChanged")
                    .field("field", field)
                    .field("value", value)
                    .finish()
            }
            Self::Submit => f.write_str("Submit"),
            Self::AuthSucceeded(account) => f.debug_tuple("AuthSucceeded").field(account).finish(),
            Self::AuthFailed(message) => f.debug_tuple("AuthFailed").field(message).finish(),
            Self::PersistFailed(message) => f.debug_tuple("PersistFailed").field(message).finish(),
        }
    }
}

/// I/O the caller must perform on behalf of the form.
///
/// The outcome of each command comes back as a [`FormEvent`]. `Debug`
/// output redacts the token.
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    /// Call the authentication provider once with these credentials.
    Authenticate(AuthenticationParams),
    /// Store the token.
    PersistToken { key: &'static str, value: String },
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticate(params) => f.debug_tuple("Authenticate").field(params).finish(),
            Self::PersistToken { key, .. } => f
                .debug_struct("PersistToken")
                .field("key", key)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}

/// The login form state machine.
///
/// `dispatch` is synchronous and performs no I/O, so the machine can be
/// driven directly in tests without any runtime.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use portico_lib::form::{Command, FormEvent, LoginForm};
/// use portico_validation::login_validation;
///
/// let mut form = LoginForm::new(Arc::new(login_validation(5)));
/// assert!(!form.state().can_submit());
///
/// form.dispatch(FormEvent::field_changed("email", "ana@example.com"));
/// form.dispatch(FormEvent::field_changed("password", "secret"));
/// assert!(form.state().can_submit());
///
/// let command = form.dispatch(FormEvent::Submit);
/// assert!(matches!(command, Some(Command::Authenticate(_))));
/// assert_eq!(form.dispatch(FormEvent::Submit), None);
/// ```
pub struct LoginForm {
    validation: Arc<dyn Validation>,
    state: FormState,
}

impl LoginForm {
    /// Create a pristine form. Each field starts empty with whatever verdict
    /// the validation gives the empty string.
    pub fn new(validation: Arc<dyn Validation>) -> Self {
        let fields = [EMAIL_FIELD, PASSWORD_FIELD]
            .into_iter()
            .map(|name| FormField::new(name, "", validation.validate(name, "")))
            .collect();

        Self {
            validation,
            state: FormState::new(fields),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn view(&self) -> FormView {
        FormView::from_state(&self.state)
    }

    /// Apply one event and return the command it produces, if any.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<Command> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.change_field(&field, value);
                None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::AuthSucceeded(account) => self.auth_succeeded(account),
            FormEvent::AuthFailed(message) => {
                if self.state.phase() == FormPhase::Submitting {
                    warn!("Authentication failed: {}", message);
                    self.fail(message);
                } else {
                    debug!("Ignoring authentication failure outside submit");
                }
                None
            }
            FormEvent::PersistFailed(message) => {
                if self.state.phase() == FormPhase::Succeeded {
                    warn!("Storing access token failed: {}", message);
                    self.fail(message);
                }
                None
            }
        }
    }

    fn change_field(&mut self, name: &str, value: String) {
        let phase = self.state.phase();
        if phase == FormPhase::Succeeded {
            debug!("Ignoring change to {} after login", name);
            return;
        }

        let error = self.validation.validate(name, &value);
        let Some(field) = self.state.field_mut(name) else {
            warn!("Ignoring change to unknown field {}", name);
            return;
        };
        field.update(value, error);

        if phase != FormPhase::Submitting {
            self.state.set_phase(FormPhase::Editing);
        }
    }

    fn submit(&mut self) -> Option<Command> {
        if !self.state.can_submit() {
            debug!(
                "Submit ignored (submitting: {}, valid: {})",
                self.state.is_submitting(),
                self.state.is_valid()
            );
            return None;
        }

        let params = AuthenticationParams::new(
            self.value_of(EMAIL_FIELD),
            self.value_of(PASSWORD_FIELD),
        );
        self.state.set_submitting(true);
        self.state.set_phase(FormPhase::Submitting);
        info!("Submitting login for {}", params.email);

        Some(Command::Authenticate(params))
    }

    fn auth_succeeded(&mut self, account: AccountModel) -> Option<Command> {
        if self.state.phase() != FormPhase::Submitting {
            debug!("Ignoring authentication result outside submit");
            return None;
        }

        // is_submitting stays set: the form is done and submit stays disabled
        info!("Login succeeded");
        self.state.set_main_error(None);
        self.state.set_phase(FormPhase::Succeeded);

        Some(Command::PersistToken {
            key: ACCESS_TOKEN_KEY,
            value: account.access_token,
        })
    }

    fn fail(&mut self, message: String) {
        self.state.set_submitting(false);
        self.state.set_main_error(Some(message));
        self.state.set_phase(FormPhase::Errored);
    }

    fn value_of(&self, name: &str) -> String {
        self.state
            .field(name)
            .map(|field| field.value().to_string())
            .unwrap_or_default()
    }
}
