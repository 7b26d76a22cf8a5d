//! Fluent assembly of per-field rule sequences.

use regex::Regex;

use crate::composite::{FieldRuleSet, ValidationComposite};
use crate::rules::{
    EmailValidation, FieldValidation, MaxLengthValidation, MinLengthValidation,
    PatternValidation, RequiredFieldValidation,
};

/// Builder for the rules of several fields.
///
/// # Example
///
/// ```
/// use portico_validation::ValidationBuilder;
///
/// let validation = ValidationBuilder::new()
///     .field("name")
///         .required()
///         .max_length(40)
///     .field("email")
///         .required()
///         .email()
///     .build();
///
/// assert_eq!(validation.rules().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    rules: FieldRuleSet,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules to a field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            name: name.into(),
        }
    }

    /// Freeze the collected rules.
    pub fn build(self) -> ValidationComposite {
        ValidationComposite::new(self.rules)
    }
}

/// Builder for the rules of a single field.
///
/// Rules run in the order they are added.
#[derive(Debug)]
pub struct FieldBuilder {
    builder: ValidationBuilder,
    name: String,
}

impl FieldBuilder {
    /// Add a custom rule. Its own field name decides where it is registered.
    pub fn rule(mut self, rule: impl FieldValidation + 'static) -> Self {
        self.builder.rules.add_rule(rule);
        self
    }

    /// Require a non-empty value.
    pub fn required(self) -> Self {
        let rule = RequiredFieldValidation::new(&self.name);
        self.rule(rule)
    }

    /// Require at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        let rule = MinLengthValidation::new(&self.name, min);
        self.rule(rule)
    }

    /// Require at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        let rule = MaxLengthValidation::new(&self.name, max);
        self.rule(rule)
    }

    /// Require a well-formed email address (empty passes).
    pub fn email(self) -> Self {
        let rule = EmailValidation::new(&self.name);
        self.rule(rule)
    }

    /// Require the value to match `pattern`.
    pub fn pattern(self, pattern: Regex) -> Self {
        let rule = PatternValidation::with_regex(&self.name, pattern);
        self.rule(rule)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        self.builder.field(name)
    }

    /// Freeze the collected rules.
    pub fn build(self) -> ValidationComposite {
        self.builder.build()
    }
}

/// Rules for the login form: a required, well-formed `email` and a required
/// `password` of at least `password_min_length` characters.
pub fn login_validation(password_min_length: usize) -> ValidationComposite {
    ValidationBuilder::new()
        .field("email")
        .required()
        .email()
        .field("password")
        .required()
        .min_length(password_min_length)
        .build()
}
