//! In-Memory Adapters
//!
//! Implementations of every port backed by process memory, for tests and
//! single-instance development runs.

mod catalog;
mod selection_repository;
mod wizard_state_store;

pub use catalog::InMemoryCatalog;
pub use selection_repository::InMemorySelectionRepository;
pub use wizard_state_store::InMemoryWizardStateStore;
