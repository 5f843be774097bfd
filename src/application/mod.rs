//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers drive the wizard; query handlers read suggestions.

pub mod handlers;
mod suggestion_pass;

#[cfg(test)]
pub(crate) mod fixtures;

pub use handlers::{
    GetComparisonHandler, GetComparisonQuery, GetSuggestionsHandler, GetSuggestionsQuery,
    GetWizardStepHandler, GetWizardStepQuery, StartWizardCommand, StartWizardHandler,
    StartWizardResult, SubmitWizardStepCommand, SubmitWizardStepHandler, SuggestionsError,
    WizardContext, WizardError, WizardOutcome, COMPLETION_MESSAGE,
};
pub use suggestion_pass::SuggestionPass;
