//! Field validation for flat, string-valued forms.
//!
//! Rules are small value types implementing [`FieldValidation`]. A
//! [`ValidationComposite`] runs the rules registered for a field in order and
//! reports the first failure.
//!
//! # Example
//!
//! ```
//! use portico_validation::{Validation, ValidationBuilder, ValidationError};
//!
//! let validation = ValidationBuilder::new()
//!     .field("email")
//!         .required()
//!         .email()
//!     .field("password")
//!         .required()
//!         .min_length(5)
//!     .build();
//!
//! assert_eq!(validation.evaluate("email", ""), Some(ValidationError::RequiredField));
//! assert_eq!(validation.evaluate("password", "ab"), Some(ValidationError::InvalidField));
//! assert_eq!(validation.validate("email", "ana@example.com"), None);
//! ```

mod builder;
mod composite;
mod error;
pub mod rules;

pub use builder::{FieldBuilder, ValidationBuilder, login_validation};
pub use composite::{FieldRuleSet, Validation, ValidationComposite};
pub use error::ValidationError;
pub use rules::FieldValidation;
