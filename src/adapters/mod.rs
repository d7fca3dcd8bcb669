//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the booking core to external systems:
//! - `memory` - In-process stores for development and tests
//! - `postgres` - Bookings and chat log in PostgreSQL
//! - `redis` - Session store with expiry
//! - `translation` - HTTP translation client and passthrough
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod postgres;
pub mod redis;
pub mod translation;

pub use memory::{InMemoryBookingRepository, InMemoryChatLog, InMemorySessionStore};
pub use postgres::{PostgresBookingRepository, PostgresChatLogRepository};
pub use self::redis::RedisSessionStore;
pub use translation::{HttpTranslator, HttpTranslatorConfig, PassthroughTranslator};
