//! Selection module - A user's weighted requirements.

mod aggregate;
mod rating_tree;
mod weight_assignment;

pub use aggregate::{rating_field_name, Selection, RATING_FIELD_PREFIX};
pub use rating_tree::RatingTree;
pub use weight_assignment::{RateEntry, WeightAssignment};
