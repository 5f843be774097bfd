//! HTTP DTOs for the advisor endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::WizardOutcome;
use crate::domain::foundation::{ApplicationId, BusinessProcessId, SelectionId};
use crate::domain::scoring::{ComparisonTable, Suggestion};
use crate::domain::wizard::{FieldError, StepForm, SubmittedValues, WizardAction};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a wizard run.
#[derive(Debug, Clone, Deserialize)]
pub struct StartWizardRequest {
    pub business_processes: Vec<BusinessProcessId>,
}

/// Request to submit the active step.
///
/// Values may arrive as JSON strings or numbers; both are passed on as text.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitStepRequest {
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

fn default_action() -> String {
    WizardAction::Next.as_str().to_string()
}

impl SubmitStepRequest {
    pub fn action(&self) -> WizardAction {
        WizardAction::parse(&self.action)
    }

    pub fn submitted_values(&self) -> SubmittedValues {
        self.values
            .iter()
            .map(|(field, value)| (field.clone(), field_text(value)))
            .collect()
    }
}

fn field_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The active step of a run.
#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub form: StepForm,
}

/// Result of a submission, tagged by `outcome`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitStepResponse {
    Cancelled,
    Moved {
        form: StepForm,
    },
    Invalid {
        errors: Vec<FieldError>,
        form: StepForm,
    },
    Completed {
        selection_id: SelectionId,
        message: String,
    },
}

impl From<WizardOutcome> for SubmitStepResponse {
    fn from(outcome: WizardOutcome) -> Self {
        match outcome {
            WizardOutcome::Cancelled => Self::Cancelled,
            WizardOutcome::Moved { form } => Self::Moved { form },
            WizardOutcome::Invalid { errors, form } => Self::Invalid { errors, form },
            WizardOutcome::Completed {
                selection_id,
                message,
            } => Self::Completed {
                selection_id,
                message,
            },
        }
    }
}

/// A suggested application with its display name.
#[derive(Debug, Clone, Serialize)]
pub struct RankedApplicationResponse {
    pub application_id: ApplicationId,
    pub name: String,
    pub score: f64,
    /// Score with exactly two decimals, as displayed.
    pub score_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub business_process: BusinessProcessId,
    pub applications: Vec<RankedApplicationResponse>,
}

impl SuggestionResponse {
    /// Builds the response, naming applications from `names` (id as fallback).
    pub fn from_suggestion(
        suggestion: &Suggestion,
        names: &BTreeMap<ApplicationId, String>,
    ) -> Self {
        let applications = suggestion
            .applications
            .iter()
            .map(|ranked| RankedApplicationResponse {
                application_id: ranked.application_id.clone(),
                name: names
                    .get(&ranked.application_id)
                    .cloned()
                    .unwrap_or_else(|| ranked.application_id.to_string()),
                score: ranked.score.as_f64(),
                score_text: ranked.score.to_string(),
            })
            .collect();
        Self {
            business_process: suggestion.business_process.clone(),
            applications,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub selection_id: SelectionId,
    pub suggestions: Vec<SuggestionResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub selection_id: SelectionId,
    pub tables: Vec<ComparisonTable>,
}

/// Label for a rate value.
#[derive(Debug, Clone, Serialize)]
pub struct RateResponse {
    pub rate: u8,
    pub text: String,
    pub description: String,
}
