//! Axum router for the advisor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_comparison, get_rate, get_suggestions, get_wizard_step, start_wizard,
    submit_wizard_step, AdvisorAppState,
};

/// Wizard routes, mounted at `/api/wizard`.
///
/// - `POST /` - Start a run
/// - `GET /` - Render the active step
/// - `POST /submit` - Submit an action for the active step
pub fn wizard_routes() -> Router<AdvisorAppState> {
    Router::new()
        .route("/", post(start_wizard).get(get_wizard_step))
        .route("/submit", post(submit_wizard_step))
}

/// Selection routes, mounted at `/api/selections`.
pub fn selection_routes() -> Router<AdvisorAppState> {
    Router::new()
        .route("/:id/suggestions", get(get_suggestions))
        .route("/:id/comparison", get(get_comparison))
}

/// The complete API, ready to be given its state.
///
/// ```ignore
/// let app = advisor_router().with_state(state);
/// ```
pub fn advisor_router() -> Router<AdvisorAppState> {
    Router::new()
        .nest("/api/wizard", wizard_routes())
        .nest("/api/selections", selection_routes())
        .route("/api/rates/:rate", get(get_rate))
}
