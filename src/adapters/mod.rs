//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - YAML file catalog (taxonomy and applications)
//! - `http` - axum REST API
//! - `memory` - in-process implementations of every port
//! - `redis` - shared wizard state store

pub mod catalog;
pub mod http;
pub mod memory;
pub mod redis;

pub use catalog::{CatalogLoadError, YamlCatalog};
pub use memory::{InMemoryCatalog, InMemorySelectionRepository, InMemoryWizardStateStore};
pub use redis::RedisWizardStateStore;
