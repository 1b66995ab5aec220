//! AI provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// Keys are optional: without a key for the selected provider, narratives
/// fall back to the "unavailable" placeholder.
#[derive(Debug, Deserialize)]
pub struct AiConfig {
    /// Provider used for narratives
    #[serde(default)]
    pub provider: AiProvider,

    /// Anthropic API key
    pub anthropic_api_key: Option<SecretString>,

    /// Gemini API key
    pub gemini_api_key: Option<SecretString>,

    /// Model override for the selected provider
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on retryable failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Output token cap for a narrative
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Anthropic,
    Gemini,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key for the selected provider, if one is set.
    pub fn api_key(&self) -> Option<&str> {
        let key = match self.provider {
            AiProvider::Anthropic => self.anthropic_api_key.as_ref(),
            AiProvider::Gemini => self.gemini_api_key.as_ref(),
        };
        key.map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Check if the selected provider can be called
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            anthropic_api_key: None,
            gemini_api_key: None,
            model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    2
}

fn default_max_tokens() -> u32 {
    2048
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Anthropic);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.max_tokens, 2048);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_api_key_follows_selected_provider() {
        let config = AiConfig {
            provider: AiProvider::Gemini,
            anthropic_api_key: Some(SecretString::new("sk-ant-xxx".to_string())),
            ..Default::default()
        };
        assert!(!config.is_configured());

        let config = AiConfig {
            gemini_api_key: Some(SecretString::new("AIza-xxx".to_string())),
            ..config
        };
        assert_eq!(config.api_key(), Some("AIza-xxx"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = AiConfig {
            anthropic_api_key: Some(SecretString::new("  ".to_string())),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_missing_key_is_valid() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AiConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = AiConfig {
            anthropic_api_key: Some(SecretString::new("sk-ant-secret".to_string())),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("sk-ant-secret"));
    }
}
