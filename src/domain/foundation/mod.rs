//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the software advisor domain.

mod errors;
mod ids;
mod ownership;
mod score;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    to_machine_name, ApplicationId, BusinessProcessId, SelectionId, SessionId, TermId, UserId,
};
pub use ownership::OwnedByUser;
pub use score::Score;
pub use timestamp::Timestamp;
pub use weight::{convert_rate_to_text, describe_rate, Weight};
