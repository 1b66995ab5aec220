//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `MATURITY_ASSESSMENT`
//! prefix and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use maturity_assessment::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok::<(), maturity_assessment::config::ConfigError>(())
//! ```

mod ai;
mod error;
mod server;
mod storage;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{CorsPolicy, Environment, LogFormat, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory development setup.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session storage backend, key namespace and Redis connection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Narrative provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MATURITY_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `MATURITY_ASSESSMENT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MATURITY_ASSESSMENT__STORAGE__BACKEND=redis` -> `storage.backend = redis`
    /// - `MATURITY_ASSESSMENT__STORAGE__REDIS_URL=redis://...` -> `storage.redis_url = ...`
    /// - `MATURITY_ASSESSMENT__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MATURITY_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Redis settings are only checked when the redis backend is selected.
    /// A missing AI key is not an error. The request timeout must outlast
    /// the AI timeout, otherwise narrative calls are cut off mid-flight.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.ai.validate()?;
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "MATURITY_ASSESSMENT__SERVER__PORT",
        "MATURITY_ASSESSMENT__SERVER__ENVIRONMENT",
        "MATURITY_ASSESSMENT__STORAGE__BACKEND",
        "MATURITY_ASSESSMENT__STORAGE__REDIS_URL",
        "MATURITY_ASSESSMENT__AI__PROVIDER",
        "MATURITY_ASSESSMENT__AI__GEMINI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> AppConfig {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result.unwrap()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load_with(&[]);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.namespace, "dma_session_");
        assert!(!config.ai.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_are_read() {
        let config = load_with(&[
            ("MATURITY_ASSESSMENT__SERVER__PORT", "3000"),
            ("MATURITY_ASSESSMENT__SERVER__ENVIRONMENT", "production"),
            ("MATURITY_ASSESSMENT__AI__PROVIDER", "gemini"),
            ("MATURITY_ASSESSMENT__AI__GEMINI_API_KEY", "AIza-test"),
        ]);
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.ai.provider, AiProvider::Gemini);
        assert_eq!(config.ai.api_key(), Some("AIza-test"));
    }

    #[test]
    fn test_redis_backend_requires_url() {
        let config = load_with(&[("MATURITY_ASSESSMENT__STORAGE__BACKEND", "redis")]);
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("STORAGE__REDIS_URL"))
        );

        let config = load_with(&[
            ("MATURITY_ASSESSMENT__STORAGE__BACKEND", "redis"),
            ("MATURITY_ASSESSMENT__STORAGE__REDIS_URL", "redis://localhost:6379"),
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_backend_reads_url_from_storage_section() {
        let config = load_with(&[
            ("MATURITY_ASSESSMENT__STORAGE__BACKEND", "redis"),
            ("MATURITY_ASSESSMENT__STORAGE__REDIS_URL", "rediss://cache:6380"),
        ]);
        assert_eq!(config.storage.redis_url(), Some("rediss://cache:6380"));
    }

    #[test]
    fn test_request_timeout_must_outlast_ai_timeout() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = config.server.request_timeout_secs;
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        config.ai.timeout_secs = config.server.request_timeout_secs - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_timeouts_leave_room_for_narrative() {
        let config = AppConfig::default();
        assert!(config.server.request_timeout() > config.ai.timeout());
    }
}
