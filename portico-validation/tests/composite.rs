//! Tests for the validation composite.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use portico_validation::rules::{MinLengthValidation, RequiredFieldValidation};
use portico_validation::{
    FieldRuleSet, FieldValidation, Validation, ValidationComposite, ValidationError,
};

/// Rule returning a fixed verdict and counting how often it ran.
struct FieldValidationSpy {
    field_name: String,
    error: Option<ValidationError>,
    calls: Arc<AtomicUsize>,
}

impl FieldValidationSpy {
    fn new(field_name: &str, error: Option<ValidationError>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = Self {
            field_name: field_name.to_string(),
            error,
            calls: Arc::clone(&calls),
        };
        (spy, calls)
    }
}

impl FieldValidation for FieldValidationSpy {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, _value: &str) -> Option<ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.error
    }
}

fn required_then_min(min: usize) -> ValidationComposite {
    ValidationComposite::build([
        Box::new(RequiredFieldValidation::new("password")) as Box<dyn FieldValidation>,
        Box::new(MinLengthValidation::new("password", min)),
    ])
}

#[test]
fn test_returns_first_failure_in_order() {
    let composite = required_then_min(5);
    assert_eq!(
        composite.evaluate("password", ""),
        Some(ValidationError::RequiredField)
    );
}

#[test]
fn test_later_rule_reports_when_earlier_passes() {
    let composite = required_then_min(5);
    assert_eq!(
        composite.evaluate("password", "ab"),
        Some(ValidationError::InvalidField)
    );
}

#[test]
fn test_valid_when_all_rules_pass() {
    let composite = required_then_min(5);
    assert_eq!(composite.evaluate("password", "abcdef"), None);
}

#[test]
fn test_order_of_registration_decides_the_error() {
    let (first, _) = FieldValidationSpy::new("email", Some(ValidationError::InvalidField));
    let (second, _) = FieldValidationSpy::new("email", Some(ValidationError::RequiredField));

    let mut rules = FieldRuleSet::new();
    rules.add_rule(first);
    rules.add_rule(second);
    let composite = ValidationComposite::new(rules);

    assert_eq!(
        composite.evaluate("email", "whatever"),
        Some(ValidationError::InvalidField)
    );
}

#[test]
fn test_short_circuits_after_first_failure() {
    let (failing, failing_calls) =
        FieldValidationSpy::new("email", Some(ValidationError::RequiredField));
    let (skipped, skipped_calls) = FieldValidationSpy::new("email", None);

    let mut rules = FieldRuleSet::new();
    rules.add_rule(failing);
    rules.add_rule(skipped);
    let composite = ValidationComposite::new(rules);

    composite.evaluate("email", "");
    assert_eq!(failing_calls.load(Ordering::SeqCst), 1);
    assert_eq!(skipped_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_only_runs_rules_of_the_requested_field() {
    let (email_rule, email_calls) =
        FieldValidationSpy::new("email", Some(ValidationError::InvalidField));
    let (password_rule, password_calls) = FieldValidationSpy::new("password", None);

    let mut rules = FieldRuleSet::new();
    rules.add_rule(email_rule);
    rules.add_rule(password_rule);
    let composite = ValidationComposite::new(rules);

    assert_eq!(composite.evaluate("password", "secret"), None);
    assert_eq!(email_calls.load(Ordering::SeqCst), 0);
    assert_eq!(password_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unknown_field_is_valid() {
    let composite = required_then_min(5);
    assert_eq!(composite.evaluate("nickname", ""), None);
    assert_eq!(composite.validate("nickname", ""), None);
}

#[test]
fn test_empty_composite_accepts_everything() {
    let composite = ValidationComposite::new(FieldRuleSet::new());
    for value in ["", "a", "anything at all"] {
        assert_eq!(composite.evaluate("email", value), None);
    }
    assert!(composite.rules().is_empty());
}

#[test]
fn test_provider_returns_error_message() {
    let composite = required_then_min(5);
    assert_eq!(
        composite.validate("password", ""),
        Some("Required field".to_string())
    );
    assert_eq!(
        composite.validate("password", "abc"),
        Some("Invalid value".to_string())
    );
    assert_eq!(composite.validate("password", "abcde"), None);
}

#[test]
fn test_rule_set_bookkeeping() {
    let mut rules = FieldRuleSet::new();
    rules.add_rule(RequiredFieldValidation::new("password"));
    rules.add_rule(MinLengthValidation::new("password", 5));
    rules.add_rule(RequiredFieldValidation::new("email"));

    assert_eq!(rules.len(), 3);
    assert_eq!(rules.field_names(), vec!["email", "password"]);
    assert_eq!(rules.rules_for("password").len(), 2);
    assert!(rules.rules_for("missing").is_empty());
}
