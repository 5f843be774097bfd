//! HTTP handlers for the wizard and suggestion endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{RequireSession, RequireUser};
use crate::application::{
    GetComparisonHandler, GetComparisonQuery, GetSuggestionsHandler, GetSuggestionsQuery,
    GetWizardStepHandler, GetWizardStepQuery, StartWizardCommand, StartWizardHandler,
    SubmitWizardStepCommand, SubmitWizardStepHandler, WizardContext,
};
use crate::domain::foundation::{convert_rate_to_text, describe_rate, SelectionId};
use crate::domain::scoring::RankingPolicy;
use crate::ports::{
    ApplicationRepository, SelectionRepository, TaxonomyProvider, WizardStateStore,
};

use super::dto::{
    ComparisonResponse, RateResponse, StartWizardRequest, StepResponse, SubmitStepRequest,
    SubmitStepResponse, SuggestionResponse, SuggestionsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Ports and settings shared by the advisor endpoints.
#[derive(Clone)]
pub struct AdvisorAppState {
    pub taxonomy: Arc<dyn TaxonomyProvider>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub selections: Arc<dyn SelectionRepository>,
    pub wizard_states: Arc<dyn WizardStateStore>,
    pub ranking_policy: RankingPolicy,
    pub wizard_namespace: String,
}

impl AdvisorAppState {
    fn wizard_context(&self) -> WizardContext {
        WizardContext::new(
            self.taxonomy.clone(),
            self.wizard_states.clone(),
            self.wizard_namespace.clone(),
        )
    }

    pub fn start_wizard_handler(&self) -> StartWizardHandler {
        StartWizardHandler::new(self.wizard_context())
    }

    pub fn get_wizard_step_handler(&self) -> GetWizardStepHandler {
        GetWizardStepHandler::new(self.wizard_context())
    }

    pub fn submit_wizard_step_handler(&self) -> SubmitWizardStepHandler {
        SubmitWizardStepHandler::new(self.wizard_context(), self.selections.clone())
    }

    pub fn get_suggestions_handler(&self) -> GetSuggestionsHandler {
        GetSuggestionsHandler::new(
            self.selections.clone(),
            self.taxonomy.clone(),
            self.applications.clone(),
            self.ranking_policy,
        )
    }

    pub fn get_comparison_handler(&self) -> GetComparisonHandler {
        GetComparisonHandler::new(
            self.selections.clone(),
            self.taxonomy.clone(),
            self.applications.clone(),
            self.ranking_policy,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wizard
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizard - Start a run for the chosen business processes
pub async fn start_wizard(
    State(state): State<AdvisorAppState>,
    identity: RequireSession,
    Json(req): Json<StartWizardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = StartWizardCommand {
        user_id: identity.user_id,
        session_id: identity.session_id,
        business_processes: req.business_processes,
    };
    let result = state.start_wizard_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(StepResponse { form: result.form })))
}

/// GET /api/wizard - Render the active step
pub async fn get_wizard_step(
    State(state): State<AdvisorAppState>,
    identity: RequireSession,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetWizardStepQuery {
        user_id: identity.user_id,
        session_id: identity.session_id,
    };
    let form = state.get_wizard_step_handler().handle(query).await?;
    Ok(Json(StepResponse { form }))
}

/// POST /api/wizard/submit - Cancel, go back, or submit the active step
pub async fn submit_wizard_step(
    State(state): State<AdvisorAppState>,
    identity: RequireSession,
    Json(req): Json<SubmitStepRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitWizardStepCommand {
        user_id: identity.user_id,
        session_id: identity.session_id,
        action: req.action(),
        values: req.submitted_values(),
    };
    let outcome = state.submit_wizard_step_handler().handle(cmd).await?;
    Ok(Json(SubmitStepResponse::from(outcome)))
}

// ════════════════════════════════════════════════════════════════════════════
// Suggestions
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/selections/:id/suggestions - Ranked applications per business process
pub async fn get_suggestions(
    State(state): State<AdvisorAppState>,
    RequireUser(user_id): RequireUser,
    Path(selection_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let selection_id = parse_selection_id(&selection_id)?;
    let query = GetSuggestionsQuery {
        user_id,
        selection_id,
    };
    let suggestions = state.get_suggestions_handler().handle(query).await?;

    let names: BTreeMap<_, _> = state
        .applications
        .find_all()
        .await?
        .into_iter()
        .map(|app| (app.id, app.name))
        .collect();

    Ok(Json(SuggestionsResponse {
        selection_id,
        suggestions: suggestions
            .iter()
            .map(|s| SuggestionResponse::from_suggestion(s, &names))
            .collect(),
    }))
}

/// GET /api/selections/:id/comparison - Side-by-side tables of the suggestions
pub async fn get_comparison(
    State(state): State<AdvisorAppState>,
    RequireUser(user_id): RequireUser,
    Path(selection_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let selection_id = parse_selection_id(&selection_id)?;
    let query = GetComparisonQuery {
        user_id,
        selection_id,
    };
    let tables = state.get_comparison_handler().handle(query).await?;
    Ok(Json(ComparisonResponse {
        selection_id,
        tables,
    }))
}

/// GET /api/rates/:rate - Label for a 0..=5 rate
pub async fn get_rate(Path(rate): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let not_found = || ApiError::not_found("Rate", &rate);
    let value: u8 = rate.trim().parse().map_err(|_| not_found())?;
    let text = convert_rate_to_text(value).ok_or_else(not_found)?;
    let description = describe_rate(value).ok_or_else(not_found)?;
    Ok(Json(RateResponse {
        rate: value,
        text: text.to_string(),
        description,
    }))
}

fn parse_selection_id(raw: &str) -> Result<SelectionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid selection ID"))
}
