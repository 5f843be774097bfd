//! Extractors for the caller identity supplied by the hosting CMS.
//!
//! The CMS authenticates the visitor and forwards two headers:
//!
//! ```text
//! X-User-Id: <account id>
//! X-Session-Id: <browser session id>
//! ```
//!
//! Suggestion endpoints only need the user; wizard endpoints need both,
//! since a wizard run is keyed by session.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{SessionId, UserId};

use crate::adapters::http::error::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Extractor that requires an acting user.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

/// Extractor that requires an acting user and their session.
#[derive(Debug, Clone)]
pub struct RequireSession {
    pub user_id: UserId,
    pub session_id: SessionId,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(&parts.headers, USER_ID_HEADER)?;
        UserId::new(user_id)
            .map(RequireUser)
            .map_err(|_| IdentityRejection::Invalid(USER_ID_HEADER))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireUser(user_id) = RequireUser::from_request_parts(parts, state).await?;
        let session_id = header_value(&parts.headers, SESSION_ID_HEADER)?;
        let session_id =
            SessionId::new(session_id).map_err(|_| IdentityRejection::Invalid(SESSION_ID_HEADER))?;
        Ok(RequireSession {
            user_id,
            session_id,
        })
    }
}

fn header_value(headers: &HeaderMap, name: &'static str) -> Result<String, IdentityRejection> {
    let value = headers
        .get(name)
        .ok_or(IdentityRejection::Missing(name))?
        .to_str()
        .map_err(|_| IdentityRejection::Invalid(name))?
        .trim();
    if value.is_empty() {
        return Err(IdentityRejection::Missing(name));
    }
    Ok(value.to_string())
}

/// Rejection for missing or unreadable identity headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityRejection {
    Missing(&'static str),
    Invalid(&'static str),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            IdentityRejection::Missing(header) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHENTICATED", format!("Missing {} header", header)),
            ),
            IdentityRejection::Invalid(header) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(format!("Invalid {} header", header)),
            ),
        };
        (status, Json(body)).into_response()
    }
}
