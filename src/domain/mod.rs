//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Taxonomy trees and candidate applications
//! - `selection` - Selection aggregate and its rating tree
//! - `scoring` - Pure rating, ranking and comparison (no I/O)
//! - `wizard` - Step sequence, wizard state and the navigation state machine

pub mod catalog;
pub mod foundation;
pub mod scoring;
pub mod selection;
pub mod wizard;
