//! Navigation actions a user can trigger on a wizard step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Button pressed on a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Cancel,
    Back,
    Next,
}

impl WizardAction {
    /// Parses a submitted action name. Anything unrecognised is `Next`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "cancel" => WizardAction::Cancel,
            "back" => WizardAction::Back,
            _ => WizardAction::Next,
        }
    }

    /// Returns the wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardAction::Cancel => "cancel",
            WizardAction::Back => "back",
            WizardAction::Next => "next",
        }
    }

    /// Only `Next` runs step validation.
    pub fn validates(&self) -> bool {
        matches!(self, WizardAction::Next)
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
