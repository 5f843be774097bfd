//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TaxonomyProvider` - Business processes, categories and functions
//! - `ApplicationRepository` - Candidate applications
//! - `SelectionRepository` - Finished selections
//! - `WizardStateStore` - Session-scoped wizard progress

mod application_repository;
mod selection_repository;
mod taxonomy_provider;
mod wizard_state_store;

pub use application_repository::ApplicationRepository;
pub use selection_repository::SelectionRepository;
pub use taxonomy_provider::TaxonomyProvider;
pub use wizard_state_store::{StateStoreError, WizardStateKey, WizardStateStore};
