//! Catalog Adapters
//!
//! File-backed implementations of the `TaxonomyProvider` and
//! `ApplicationRepository` ports.

mod yaml_catalog;

pub use yaml_catalog::{CatalogLoadError, YamlCatalog};
