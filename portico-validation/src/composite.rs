//! Per-field rule sets and the composite that evaluates them.

use std::collections::HashMap;
use std::fmt;

use crate::ValidationError;
use crate::rules::FieldValidation;

/// Anything that can judge a field value.
///
/// Returns the user-facing error message, or `None` when the value is
/// accepted. The form state machine only depends on this trait, so a
/// [`ValidationComposite`] and a test stub are interchangeable.
pub trait Validation: Send + Sync {
    fn validate(&self, field_name: &str, value: &str) -> Option<String>;
}

/// Ordered rules per field name.
///
/// Rules are keyed by their own [`FieldValidation::field_name`] and kept in
/// registration order.
#[derive(Default)]
pub struct FieldRuleSet {
    rules: HashMap<String, Vec<Box<dyn FieldValidation>>>,
}

impl FieldRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat list of rules, preserving their order per field.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FieldValidation>>,
    {
        let mut set = Self::new();
        for rule in rules {
            set.push(rule);
        }
        set
    }

    /// Append a rule after the rules already registered for its field.
    pub fn add_rule(&mut self, rule: impl FieldValidation + 'static) {
        self.push(Box::new(rule));
    }

    fn push(&mut self, rule: Box<dyn FieldValidation>) {
        self.rules
            .entry(rule.field_name().to_string())
            .or_default()
            .push(rule);
    }

    /// Rules registered for `field_name`, in evaluation order.
    pub fn rules_for(&self, field_name: &str) -> &[Box<dyn FieldValidation>] {
        self.rules.get(field_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of all fields with at least one rule, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of rules across all fields.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for FieldRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.field_names() {
            map.entry(&name, &self.rules_for(name).len());
        }
        map.finish()
    }
}

/// Runs a frozen [`FieldRuleSet`] and reports the first failure per field.
///
/// A field with no registered rules, including a field name the composite
/// has never seen, is valid for every input.
#[derive(Debug)]
pub struct ValidationComposite {
    rules: FieldRuleSet,
}

impl ValidationComposite {
    pub fn new(rules: FieldRuleSet) -> Self {
        Self { rules }
    }

    /// Build directly from a flat list of rules.
    pub fn build<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FieldValidation>>,
    {
        Self::new(FieldRuleSet::from_rules(rules))
    }

    /// Evaluate `value` against the rules for `field_name` in order, stopping
    /// at the first rule that rejects it.
    pub fn evaluate(&self, field_name: &str, value: &str) -> Option<ValidationError> {
        self.rules
            .rules_for(field_name)
            .iter()
            .find_map(|rule| rule.validate(value))
    }

    pub fn rules(&self) -> &FieldRuleSet {
        &self.rules
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field_name: &str, value: &str) -> Option<String> {
        let error = self.evaluate(field_name, value)?;
        log::trace!("{} rejected by {}", field_name, error.kind_name());
        Some(error.to_string())
    }
}
