//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the booking core and the outside world. Adapters implement these ports.
//!
//! - `BookingRepository` - Persists bookings and answers capacity queries
//! - `AnalyticsReader` - Aggregate booking figures for the dashboard
//! - `ChatLogRepository` - Append-only log of chat exchanges
//! - `SessionStore` - Per-visitor session persistence for the web boundary
//! - `Translator` - Best-effort text translation

mod analytics_reader;
mod booking_repository;
mod chat_log_repository;
mod session_store;
mod translator;

pub use analytics_reader::{
    AnalyticsReader, BookingAnalytics, DateSales, TicketTypeCount, POPULAR_DATES_LIMIT,
};
pub use booking_repository::{BookingRepository, StorageError};
pub use chat_log_repository::ChatLogRepository;
pub use session_store::{SessionStore, SessionStoreError};
pub use translator::{TranslationError, Translator};
