//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MUSEUM_BOOKING` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! development setup: in-memory storage, in-memory sessions and no translation.
//!
//! # Example
//!
//! ```no_run
//! use museum_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod booking;
mod database;
mod error;
mod redis;
mod server;
mod translation;

pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use self::redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use translation::TranslationConfig;

use std::time::Duration;

use serde::Deserialize;

use crate::domain::session::DEFAULT_SESSION_TTL_SECS;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL; bookings stay in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Redis; sessions stay in memory when absent
    #[serde(default)]
    pub redis: Option<RedisConfig>,

    /// Capacity and message limits
    #[serde(default)]
    pub booking: BookingConfig,

    /// Translation service
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MUSEUM_BOOKING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MUSEUM_BOOKING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MUSEUM_BOOKING__DATABASE__URL=...` -> `database.url = ...`
    /// - `MUSEUM_BOOKING__BOOKING__DAILY_CAPACITY=300` -> `booking.daily_capacity = 300`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MUSEUM_BOOKING")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        if let Some(redis) = &self.redis {
            redis.validate()?;
        }
        self.booking.validate()?;
        self.translation.validate()?;
        Ok(())
    }

    /// Idle lifetime of a chat session, whichever store holds it.
    ///
    /// Taken from the Redis section when present so both stores agree.
    pub fn session_ttl(&self) -> Duration {
        self.redis
            .as_ref()
            .map(RedisConfig::session_ttl)
            .unwrap_or(Duration::from_secs(DEFAULT_SESSION_TTL_SECS))
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
