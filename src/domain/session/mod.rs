//! Chat session module.
//!
//! A session is the web boundary's container for one visitor: their
//! conversation state plus the transcript of exchanges so far.

mod aggregate;
mod exchange;
mod limits;

pub use aggregate::{ChatSession, DEFAULT_SESSION_TTL_SECS};
pub use exchange::ChatExchange;
pub use limits::{MessageLimits, DEFAULT_MAX_MESSAGE_CHARS, DEFAULT_MAX_REPLY_CHARS};
