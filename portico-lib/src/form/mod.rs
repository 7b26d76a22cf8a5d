//! Login form state machine.
//!
//! [`LoginForm`] is the only writer of a [`FormState`]. It turns
//! [`FormEvent`]s into state changes and, where I/O is needed, a [`Command`]
//! for the caller to execute. Readers observe the state directly or through
//! a [`FormView`] snapshot.

mod field;
mod machine;
mod state;
pub mod view;

pub use field::FormField;
pub use machine::{Command, EMAIL_FIELD, FormEvent, LoginForm, PASSWORD_FIELD};
pub use state::{FormPhase, FormState};
pub use view::{FieldStatus, FormView, ViewNode};
