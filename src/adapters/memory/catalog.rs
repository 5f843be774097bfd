//! In-Memory Catalog Adapter
//!
//! Holds taxonomy trees and applications in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::catalog::{Application, BusinessProcess, FunctionTree};
use crate::domain::foundation::{ApplicationId, BusinessProcessId, DomainError, ErrorCode};
use crate::ports::{ApplicationRepository, TaxonomyProvider};

/// In-memory taxonomy and application store
///
/// Contents are fixed at construction; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    processes: Arc<Vec<(BusinessProcess, FunctionTree)>>,
    applications: Arc<Vec<Application>>,
}

impl InMemoryCatalog {
    /// Create a catalog from loaded data
    pub fn with_data(
        processes: Vec<(BusinessProcess, FunctionTree)>,
        applications: Vec<Application>,
    ) -> Self {
        Self {
            processes: Arc::new(processes),
            applications: Arc::new(applications),
        }
    }
}

#[async_trait]
impl TaxonomyProvider for InMemoryCatalog {
    async fn function_tree(
        &self,
        business_process: &BusinessProcessId,
    ) -> Result<FunctionTree, DomainError> {
        self.processes
            .iter()
            .find(|(p, _)| &p.id == business_process)
            .map(|(_, tree)| tree.clone())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::BusinessProcessNotFound,
                    format!("Business process not found: {}", business_process),
                )
            })
    }

    async fn business_process_names(
        &self,
    ) -> Result<BTreeMap<BusinessProcessId, String>, DomainError> {
        Ok(self
            .processes
            .iter()
            .filter(|(p, _)| !p.is_reserved())
            .map(|(p, _)| (p.id.clone(), p.name.clone()))
            .collect())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Application>, DomainError> {
        Ok(self.applications.as_ref().clone())
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError> {
        Ok(self.applications.iter().find(|a| &a.id == id).cloned())
    }
}
