//! Wizard State Store Port - Session-scoped persistence of wizard progress.
//!
//! State lives for one browsing session. It is saved after every move,
//! and cleared on cancel and on completion.

use async_trait::async_trait;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::wizard::WizardState;

/// Key of one stored wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WizardStateKey {
    pub namespace: String,
    pub session_id: SessionId,
}

impl WizardStateKey {
    pub fn new(namespace: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            namespace: namespace.into(),
            session_id,
        }
    }
}

impl fmt::Display for WizardStateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.session_id)
    }
}

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("State store unavailable: {0}")]
    Unavailable(String),
}

impl From<StateStoreError> for DomainError {
    fn from(err: StateStoreError) -> Self {
        DomainError::new(ErrorCode::CacheError, err.to_string())
    }
}

/// Port for persisting in-progress wizard state
#[async_trait]
pub trait WizardStateStore: Send + Sync {
    /// Load state, `None` if nothing is stored under the key.
    async fn load(&self, key: &WizardStateKey) -> Result<Option<WizardState>, StateStoreError>;

    /// Save state, replacing any previous value.
    async fn save(&self, key: &WizardStateKey, state: &WizardState)
        -> Result<(), StateStoreError>;

    /// Remove state. Clearing a missing key is not an error.
    async fn clear(&self, key: &WizardStateKey) -> Result<(), StateStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_state_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn WizardStateStore) {}
    }

    #[test]
    fn key_displays_as_namespace_and_session() {
        let key = WizardStateKey::new("software_advisor", SessionId::new("abc").unwrap());
        assert_eq!(key.to_string(), "software_advisor:abc");
    }

    #[test]
    fn store_errors_map_to_cache_error() {
        let err: DomainError = StateStoreError::Unavailable("connection refused".into()).into();
        assert_eq!(err.code, ErrorCode::CacheError);
        assert!(err.message.contains("connection refused"));
    }
}
