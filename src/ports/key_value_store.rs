//! Key-value store port.
//!
//! The only storage primitive the assessment needs: whole-value get and
//! replace by string key. No transactions, no partial updates, no expiry.

use async_trait::async_trait;

/// Errors from a key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation timed out")]
    Timeout,

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Port for opaque byte storage keyed by string.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored bytes, or `None` if the key was never set.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KeyValueStore) {}
    }

    #[test]
    fn storage_error_displays_reason() {
        assert_eq!(
            StorageError::Unavailable("connection refused".into()).to_string(),
            "storage backend unavailable: connection refused"
        );
    }
}
