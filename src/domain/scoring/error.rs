//! Scoring errors.

use thiserror::Error;

use crate::domain::foundation::{ApplicationId, BusinessProcessId};

/// Errors raised while rating an application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// No weighted function contributes to the denominator.
    #[error("score for {application} in {business_process} is undefined: no weighted functions")]
    DivisionUndefined {
        application: ApplicationId,
        business_process: BusinessProcessId,
    },
}
