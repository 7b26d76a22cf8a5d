//! Login form core
//!
//! A reactive state machine for a login form. Field input events are checked
//! by a [`Validation`](portico_validation::Validation) provider, submit is
//! guarded so that at most one authentication call is outstanding, and the
//! resulting token is handed to a [`Storage`](storage::Storage) backend.

pub mod auth;
pub mod controller;
pub mod error;
pub mod form;
pub mod storage;

pub use controller::{FormHandle, LoginController};
pub use form::{Command, FormEvent, FormPhase, FormState, FormView, LoginForm};
