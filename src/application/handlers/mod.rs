//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod suggestions;
pub mod wizard;

pub use suggestions::{
    GetComparisonHandler, GetComparisonQuery, GetSuggestionsHandler, GetSuggestionsQuery,
    SuggestionsError,
};
pub use wizard::{
    GetWizardStepHandler, GetWizardStepQuery, StartWizardCommand, StartWizardHandler,
    StartWizardResult, SubmitWizardStepCommand, SubmitWizardStepHandler, WizardContext,
    WizardError, WizardOutcome, COMPLETION_MESSAGE,
};
