//! Taxonomy provider port.
//!
//! Supplies business-process vocabularies and their category -> function
//! trees, as maintained by the hosting CMS.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::catalog::FunctionTree;
use crate::domain::foundation::{BusinessProcessId, DomainError};

/// Read-only access to the requirement taxonomy.
#[async_trait]
pub trait TaxonomyProvider: Send + Sync {
    /// Returns the category -> function tree of a business process.
    ///
    /// # Errors
    ///
    /// - `BusinessProcessNotFound` if the process is unknown
    /// - `CatalogError` if the source cannot be read
    async fn function_tree(
        &self,
        business_process: &BusinessProcessId,
    ) -> Result<FunctionTree, DomainError>;

    /// Returns display names keyed by machine name.
    ///
    /// The reserved `categories` vocabulary is never included.
    async fn business_process_names(
        &self,
    ) -> Result<BTreeMap<BusinessProcessId, String>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn TaxonomyProvider) {}
    }
}
