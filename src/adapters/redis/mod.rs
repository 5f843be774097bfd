//! Redis Adapters
//!
//! Shared wizard state for deployments running more than one instance.

mod wizard_state_store;

pub use wizard_state_store::RedisWizardStateStore;
