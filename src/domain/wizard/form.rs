//! Presentation-neutral description of a rendered wizard step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Weight;

use super::{StepId, StepSequence};

/// Prefix of every step page title.
pub const STEP_TITLE_PREFIX: &str = "Software selection: ";

/// Values posted for a step, keyed by element name.
pub type SubmittedValues = BTreeMap<String, String>;

/// A user-correctable problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A 0..=5 slider for a category or function weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeField {
    pub name: String,
    pub label: String,
    pub min: u8,
    pub max: u8,
    pub step: u8,
    pub default: u8,
}

impl RangeField {
    pub fn weight(name: impl Into<String>, label: impl Into<String>, default: Weight) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            min: Weight::ZERO.value(),
            max: Weight::MAX.value(),
            step: 1,
            default: default.value(),
        }
    }
}

/// A single-line or multi-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub name: String,
    pub label: String,
    pub description: String,
    pub multiline: bool,
    pub required: bool,
    pub default: String,
}

/// One element of a step form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormElement {
    /// Category header slider followed by its function sliders.
    CategoryGroup {
        category: RangeField,
        functions: Vec<RangeField>,
    },
    Text(TextField),
}

/// A navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAction {
    pub name: String,
    pub label: String,
}

impl FormAction {
    fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// A rendered step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepForm {
    pub step_id: StepId,
    pub title: String,
    pub elements: Vec<FormElement>,
    pub actions: Vec<FormAction>,
}

impl StepForm {
    /// Creates a form with the page title and navigation buttons for a step.
    pub fn new(
        step_id: StepId,
        step_title: &str,
        sequence: &StepSequence,
        elements: Vec<FormElement>,
    ) -> Self {
        let actions = build_actions(&step_id, sequence);
        Self {
            step_id,
            title: format!("{}{}", STEP_TITLE_PREFIX, step_title),
            elements,
            actions,
        }
    }

    pub fn action(&self, name: &str) -> Option<&FormAction> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// Cancel is always offered; back is hidden on the first step; next reads
/// "Finish" on the last step.
fn build_actions(step_id: &StepId, sequence: &StepSequence) -> Vec<FormAction> {
    let mut actions = vec![FormAction::new("cancel", "Cancel selection process")];
    if !sequence.is_first(step_id) {
        actions.push(FormAction::new("back", "Back"));
    }
    let next_label = if sequence.is_last(step_id) {
        "Finish"
    } else {
        "Next step"
    };
    actions.push(FormAction::new("next", next_label));
    actions
}
