//! Session storage configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Session storage configuration
///
/// Redis settings are read only when `backend = redis`.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Key-value backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Prefix prepended to access codes to form storage keys
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Redis URL; may carry credentials
    pub redis_url: Option<SecretString>,

    /// Bound on connecting and on each GET/SET, in seconds
    #[serde(default = "default_redis_timeout")]
    pub redis_timeout_secs: u64,
}

/// Key-value backend type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Redis,
}

impl StorageConfig {
    /// Redis URL, if one is set.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url
            .as_ref()
            .map(|url| url.expose_secret().as_str())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn redis_timeout(&self) -> Duration {
        Duration::from_secs(self.redis_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.namespace.trim().is_empty() || self.namespace.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidNamespace);
        }
        if self.backend == StorageBackend::Redis {
            let url = self
                .redis_url()
                .ok_or(ValidationError::MissingRequired("STORAGE__REDIS_URL"))?;
            if !url.starts_with("redis://") && !url.starts_with("rediss://") {
                return Err(ValidationError::InvalidRedisUrl);
            }
            if self.redis_timeout_secs == 0 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            namespace: default_namespace(),
            redis_url: None,
            redis_timeout_secs: default_redis_timeout(),
        }
    }
}

fn default_namespace() -> String {
    "dma_session_".to_string()
}

fn default_redis_timeout() -> u64 {
    5
}
