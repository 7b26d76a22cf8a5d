//! Read-only view of the form for renderers and tests.
//!
//! Nodes are addressed by stable string ids (see [`ids`]). Each field
//! contributes an input node named after the field and a status node named
//! `<field>-status`.

use super::{FormPhase, FormState};

/// Stable node ids.
pub mod ids {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const SUBMIT: &str = "submit";
    pub const EMAIL_STATUS: &str = "email-status";
    pub const PASSWORD_STATUS: &str = "password-status";
    pub const ERROR_WRAP: &str = "error-wrap";
    pub const MAIN_ERROR: &str = "main-error";
    pub const SPINNER: &str = "spinner";
    pub const FORM: &str = "form";
}

/// Title of a status node whose field is valid.
pub const VALID_TITLE: &str = "All good!";
/// Indicator of a valid field.
pub const VALID_INDICATOR: &str = "🟢";
/// Indicator of an invalid field.
pub const INVALID_INDICATOR: &str = "🔴";

const STATUS_SUFFIX: &str = "-status";

/// Value and verdict of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub name: String,
    pub value: String,
    pub error_message: Option<String>,
    pub is_valid: bool,
}

/// A renderable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub id: String,
    /// Tooltip text.
    pub title: Option<String>,
    pub text: String,
    pub disabled: bool,
    /// Number of child nodes currently shown.
    pub children: usize,
}

impl ViewNode {
    fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            text: text.into(),
            disabled: false,
            children: 0,
        }
    }
}

/// Everything an observer may read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldStatus>,
    pub can_submit: bool,
    pub is_submitting: bool,
    /// Whether an authentication call is still pending. False once the form
    /// has succeeded, even though `is_submitting` stays set.
    pub is_loading: bool,
    pub main_error: Option<String>,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            fields: state
                .fields()
                .iter()
                .map(|field| FieldStatus {
                    name: field.name().to_string(),
                    value: field.value().to_string(),
                    error_message: field.error().map(str::to_string),
                    is_valid: field.is_valid(),
                })
                .collect(),
            can_submit: state.can_submit(),
            is_submitting: state.is_submitting(),
            is_loading: state.is_submitting() && state.phase() != FormPhase::Succeeded,
            main_error: state.main_error().map(str::to_string),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldStatus> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Look up a node by id. Nodes that are not currently shown (the
    /// spinner while idle, the main error while there is none) are `None`.
    pub fn node(&self, id: &str) -> Option<ViewNode> {
        match id {
            ids::SUBMIT => Some(ViewNode {
                disabled: !self.can_submit,
                ..ViewNode::new(id, "Sign in")
            }),
            ids::ERROR_WRAP => Some(ViewNode {
                children: usize::from(self.is_loading) + usize::from(self.main_error.is_some()),
                ..ViewNode::new(id, "")
            }),
            ids::MAIN_ERROR => self
                .main_error
                .as_ref()
                .map(|message| ViewNode::new(id, message.as_str())),
            ids::SPINNER => self.is_loading.then(|| ViewNode::new(id, "")),
            ids::FORM => Some(ViewNode {
                // inputs, statuses, submit and error wrap
                children: self.fields.len() * 2 + 2,
                ..ViewNode::new(id, "")
            }),
            _ => self.field_node(id),
        }
    }

    /// All nodes currently shown, in document order.
    pub fn nodes(&self) -> Vec<ViewNode> {
        let mut order: Vec<String> = vec![ids::FORM.to_string()];
        for field in &self.fields {
            order.push(field.name.clone());
            order.push(format!("{}{}", field.name, STATUS_SUFFIX));
        }
        order.extend(
            [ids::SUBMIT, ids::ERROR_WRAP, ids::SPINNER, ids::MAIN_ERROR].map(str::to_string),
        );

        order.iter().filter_map(|id| self.node(id)).collect()
    }

    fn field_node(&self, id: &str) -> Option<ViewNode> {
        if let Some(name) = id.strip_suffix(STATUS_SUFFIX) {
            let field = self.field(name)?;
            let (title, text) = match &field.error_message {
                Some(message) => (message.clone(), INVALID_INDICATOR),
                None => (VALID_TITLE.to_string(), VALID_INDICATOR),
            };
            return Some(ViewNode {
                title: Some(title),
                ..ViewNode::new(id, text)
            });
        }

        let field = self.field(id)?;
        Some(ViewNode::new(id, field.value.as_str()))
    }
}
