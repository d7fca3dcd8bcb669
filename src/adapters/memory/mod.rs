//! In-memory adapters for development and tests.

mod booking_repository;
mod chat_log;
mod session_store;

pub use booking_repository::InMemoryBookingRepository;
pub use chat_log::InMemoryChatLog;
pub use session_store::InMemorySessionStore;
