//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, languages, errors)
//! - `booking` - Booking values, the stored booking record, card checksum
//! - `conversation` - Intents, dialogue phases and state, extraction, replies
//! - `session` - Chat sessions and their transcripts

pub mod booking;
pub mod conversation;
pub mod foundation;
pub mod session;
