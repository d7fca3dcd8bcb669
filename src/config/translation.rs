//! Translation service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// LibreTranslate-compatible service settings
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// When false every text passes through untranslated
    #[serde(default)]
    pub enabled: bool,

    /// Service root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, if the service requires one
    pub api_key: Option<Secret<String>>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidTranslationUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = TranslationConfig::default();
        assert!(!config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disabled_config_skips_url_check() {
        let config = TranslationConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_requires_http_url() {
        let config = TranslationConfig {
            enabled: true,
            base_url: "ftp://translate.example.org".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTranslationUrl));
    }

    #[test]
    fn test_enabled_with_valid_url() {
        let config = TranslationConfig {
            enabled: true,
            base_url: "https://translate.example.org".to_string(),
            timeout_secs: 3,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
