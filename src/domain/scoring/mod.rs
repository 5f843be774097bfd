//! Scoring Module - Pure rating, ranking and comparison of applications.
//!
//! Everything here is stateless. The suggestion pass in the application
//! layer gathers inputs through the ports and calls into this module.

mod comparison;
mod error;
mod ranking;
mod rating;

pub use comparison::{
    rank_header, ComparisonCategory, ComparisonColumn, ComparisonRow, ComparisonTable,
};
pub use error::ScoringError;
pub use ranking::{RankedApplication, RankingPolicy, Suggestion, SuggestionRanker, Suggestions};
pub use rating::ApplicationRater;
