//! Error responses shared by the HTTP adapters.
//!
//! Every failure leaves the API as `{ code, message, details? }` with a status
//! derived from the domain [`ErrorCode`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{SuggestionsError, WizardError};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }
}

/// An HTTP status paired with its error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorResponse::not_found(resource_type, id))
    }
}

/// Status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SelectionNotFound
        | ErrorCode::BusinessProcessNotFound
        | ErrorCode::WizardNotStarted => StatusCode::NOT_FOUND,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::CacheError => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::CatalogError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);
        if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "Request failed");
        }
        let mut body = ErrorResponse::new(err.code.to_string(), err.message);
        if !err.details.is_empty() {
            body.details = serde_json::to_value(&err.details).ok();
        }
        Self::new(status, body)
    }
}

impl From<WizardError> for ApiError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::NotStarted(session) => Self::new(
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    ErrorCode::WizardNotStarted.to_string(),
                    format!("No wizard in progress for session: {}", session),
                ),
            ),
            WizardError::Domain(err) => err.into(),
        }
    }
}

impl From<SuggestionsError> for ApiError {
    fn from(err: SuggestionsError) -> Self {
        match err {
            SuggestionsError::SelectionNotFound(id) => Self::new(
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    ErrorCode::SelectionNotFound.to_string(),
                    format!("Selection not found: {}", id),
                ),
            ),
            SuggestionsError::Domain(err) => err.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SelectionId, SessionId};

    #[test]
    fn error_response_not_found_names_resource() {
        let error = ErrorResponse::not_found("Rate", "9");
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Rate not found: 9");
    }

    #[test]
    fn forbidden_domain_error_maps_to_403() {
        let err = DomainError::new(ErrorCode::Forbidden, "Owner mismatch");
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::FORBIDDEN);
        assert_eq!(api.body.code, "FORBIDDEN");
    }

    #[test]
    fn validation_details_are_carried() {
        let err = DomainError::validation("title", "Title is required");
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.body.details, Some(serde_json::json!({"field": "title"})));
    }

    #[test]
    fn wizard_not_started_maps_to_404() {
        let session = SessionId::new("s-1").unwrap();
        let response = ApiError::from(WizardError::NotStarted(session)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_selection_maps_to_404() {
        let api = ApiError::from(SuggestionsError::SelectionNotFound(SelectionId::new()));
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.body.code, "SELECTION_NOT_FOUND");
    }

    #[test]
    fn cache_failures_are_unavailable() {
        assert_eq!(status_for(ErrorCode::CacheError), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status_for(ErrorCode::CatalogError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
