//! In-Memory Selection Repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SelectionId};
use crate::domain::selection::Selection;
use crate::ports::SelectionRepository;

/// In-memory storage for finished selections
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionRepository {
    selections: Arc<RwLock<HashMap<SelectionId, Selection>>>,
}

impl InMemorySelectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored selections
    pub async fn count(&self) -> usize {
        self.selections.read().await.len()
    }
}

#[async_trait]
impl SelectionRepository for InMemorySelectionRepository {
    async fn save(&self, selection: &Selection) -> Result<(), DomainError> {
        self.selections
            .write()
            .await
            .insert(selection.id(), selection.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SelectionId) -> Result<Option<Selection>, DomainError> {
        Ok(self.selections.read().await.get(id).cloned())
    }
}
