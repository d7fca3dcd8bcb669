//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, languages, and the cross-cutting error type
//! used by every other layer of the booking assistant.

mod errors;
mod ids;
mod language;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{BookingId, SessionId};
pub use language::Language;
pub use timestamp::Timestamp;
