//! Redis configuration
//!
//! Optional: without it sessions are kept in process memory and lost on
//! restart.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::session::DEFAULT_SESSION_TTL_SECS;

/// Session store settings
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: String,

    /// Idle session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

impl RedisConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("REDIS__URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

fn default_session_ttl() -> u64 {
    DEFAULT_SESSION_TTL_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_defaults_to_a_day() {
        let config = RedisConfig::default();
        assert_eq!(config.session_ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_validation_missing_url() {
        assert_eq!(
            RedisConfig::default().validate(),
            Err(ValidationError::MissingRequired("REDIS__URL"))
        );
    }

    #[test]
    fn test_validation_invalid_scheme() {
        let config = RedisConfig {
            url: "http://localhost:6379".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRedisUrl));
    }

    #[test]
    fn test_validation_zero_ttl() {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
            session_ttl_secs: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionTtl));
    }

    #[test]
    fn test_validation_tls_url() {
        let config = RedisConfig {
            url: "rediss://cache.example.org:6380".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
