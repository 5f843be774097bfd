//! HTTP adapters - REST API over axum.
//!
//! The hosting CMS owns authentication and forwards the acting user and
//! session as headers; see [`middleware`].

pub mod advisor;
pub mod error;
pub mod middleware;

pub use advisor::{advisor_router, AdvisorAppState};
pub use error::{ApiError, ErrorResponse};
