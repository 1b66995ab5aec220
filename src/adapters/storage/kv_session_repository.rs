//! Session repository over any key-value store.
//!
//! Sessions are stored as JSON under `{namespace}{access code}` and
//! replaced whole on every save.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::assessment::Session;
use crate::domain::foundation::{AccessCode, DomainError, ErrorCode};
use crate::ports::{KeyValueStore, SessionRepository, StorageError};

/// Default key namespace for stored sessions.
pub const DEFAULT_SESSION_NAMESPACE: &str = "dma_session_";

/// `SessionRepository` backed by a `KeyValueStore`.
#[derive(Clone)]
pub struct KeyValueSessionRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl KeyValueSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_namespace(store, DEFAULT_SESSION_NAMESPACE)
    }

    pub fn with_namespace(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Storage key for a code.
    pub fn key_for(&self, code: &AccessCode) -> String {
        format!("{}{}", self.namespace, code.as_str())
    }
}

fn storage_error(err: StorageError) -> DomainError {
    DomainError::new(ErrorCode::StorageError, err.to_string())
}

#[async_trait]
impl SessionRepository for KeyValueSessionRepository {
    async fn find(&self, code: &AccessCode) -> Result<Option<Session>, DomainError> {
        let key = self.key_for(code);
        let Some(bytes) = self.store.get(&key).await.map_err(storage_error)? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Stored session is unreadable: {}", e),
            )
            .with_detail("key", key)
        })
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec(session)
            .map_err(|e| DomainError::new(ErrorCode::SerializationError, e.to_string()))?;
        self.store
            .set(&self.key_for(session.code()), bytes)
            .await
            .map_err(storage_error)
    }
}
