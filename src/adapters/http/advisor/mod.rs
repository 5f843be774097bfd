//! HTTP adapter for the software selection wizard and its suggestions.

mod dto;
mod handlers;
mod routes;

#[cfg(test)]
mod tests;

pub use dto::{
    ComparisonResponse, RankedApplicationResponse, RateResponse, StartWizardRequest,
    StepResponse, SubmitStepRequest, SubmitStepResponse, SuggestionResponse,
    SuggestionsResponse,
};
pub use handlers::AdvisorAppState;
pub use routes::{advisor_router, selection_routes, wizard_routes};
