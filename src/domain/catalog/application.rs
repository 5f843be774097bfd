//! Candidate software application records.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{ApplicationId, BusinessProcessId, TermId};

/// A candidate software product and the functions it supports.
///
/// Support is boolean membership per business process; applications carry
/// no weights of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub name: String,
    #[serde(default)]
    pub functions: BTreeMap<BusinessProcessId, BTreeSet<TermId>>,
}

impl Application {
    pub fn new(id: ApplicationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            functions: BTreeMap::new(),
        }
    }

    /// Declares support for functions of a business process.
    pub fn with_functions(
        mut self,
        business_process: BusinessProcessId,
        functions: impl IntoIterator<Item = TermId>,
    ) -> Self {
        self.functions
            .entry(business_process)
            .or_default()
            .extend(functions);
        self
    }

    /// Supported functions for a business process; empty if none are declared.
    pub fn supported_functions(&self, business_process: &BusinessProcessId) -> BTreeSet<TermId> {
        self.functions
            .get(business_process)
            .cloned()
            .unwrap_or_default()
    }

    pub fn supports(&self, business_process: &BusinessProcessId, function: TermId) -> bool {
        self.functions
            .get(business_process)
            .is_some_and(|set| set.contains(&function))
    }
}
