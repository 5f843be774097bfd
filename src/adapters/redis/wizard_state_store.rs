//! Redis-backed wizard state store for multi-server deployments.
//!
//! State is stored as JSON under `<namespace>:<session_id>` with an expiry,
//! so abandoned runs disappear on their own.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::wizard::WizardState;
use crate::ports::{StateStoreError, WizardStateKey, WizardStateStore};

/// Redis wizard state store.
#[derive(Clone)]
pub struct RedisWizardStateStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisWizardStateStore {
    /// Create a store whose entries expire `ttl_secs` after the last save.
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }

    fn redis_key(key: &WizardStateKey) -> String {
        key.to_string()
    }
}

#[async_trait]
impl WizardStateStore for RedisWizardStateStore {
    async fn load(&self, key: &WizardStateKey) -> Result<Option<WizardState>, StateStoreError> {
        let mut conn = self.conn.clone();
        let json: Option<String> = conn
            .get(Self::redis_key(key))
            .await
            .map_err(|e: redis::RedisError| StateStoreError::Unavailable(e.to_string()))?;

        json.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| StateStoreError::DeserializationFailed(e.to_string()))
        })
        .transpose()
    }

    async fn save(
        &self,
        key: &WizardStateKey,
        state: &WizardState,
    ) -> Result<(), StateStoreError> {
        let json = serde_json::to_string(state)
            .map_err(|e| StateStoreError::SerializationFailed(e.to_string()))?;

        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(Self::redis_key(key))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| StateStoreError::Unavailable(e.to_string()))
    }

    async fn clear(&self, key: &WizardStateKey) -> Result<(), StateStoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::redis_key(key))
            .await
            .map_err(|e: redis::RedisError| StateStoreError::Unavailable(e.to_string()))
    }
}

impl std::fmt::Debug for RedisWizardStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisWizardStateStore")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
