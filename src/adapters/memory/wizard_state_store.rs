//! In-Memory Wizard State Store
//!
//! Keeps wizard state in process memory. State is lost on restart and is
//! not shared between instances.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::wizard::WizardState;
use crate::ports::{StateStoreError, WizardStateKey, WizardStateStore};

/// In-memory storage for wizard state
#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardStateStore {
    states: Arc<RwLock<HashMap<WizardStateKey, WizardState>>>,
}

impl InMemoryWizardStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored states
    pub async fn state_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl WizardStateStore for InMemoryWizardStateStore {
    async fn load(&self, key: &WizardStateKey) -> Result<Option<WizardState>, StateStoreError> {
        Ok(self.states.read().await.get(key).cloned())
    }

    async fn save(
        &self,
        key: &WizardStateKey,
        state: &WizardState,
    ) -> Result<(), StateStoreError> {
        self.states.write().await.insert(key.clone(), state.clone());
        Ok(())
    }

    async fn clear(&self, key: &WizardStateKey) -> Result<(), StateStoreError> {
        self.states.write().await.remove(key);
        Ok(())
    }
}
