//! Booking rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::booking::DEFAULT_DAILY_CAPACITY;
use crate::domain::session::{MessageLimits, DEFAULT_MAX_MESSAGE_CHARS, DEFAULT_MAX_REPLY_CHARS};

/// Capacity and message length limits
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Tickets sellable per date and ticket type
    #[serde(default = "default_daily_capacity")]
    pub daily_capacity: u32,

    /// Incoming messages are cut to this many characters
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,

    /// Replies are cut to this many characters
    #[serde(default = "default_max_reply_chars")]
    pub max_reply_chars: usize,
}

impl BookingConfig {
    pub fn message_limits(&self) -> MessageLimits {
        MessageLimits {
            max_message_chars: self.max_message_chars,
            max_reply_chars: self.max_reply_chars,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.daily_capacity == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        if self.max_message_chars == 0 || self.max_reply_chars == 0 {
            return Err(ValidationError::InvalidMessageLimit);
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            daily_capacity: default_daily_capacity(),
            max_message_chars: default_max_message_chars(),
            max_reply_chars: default_max_reply_chars(),
        }
    }
}

fn default_daily_capacity() -> u32 {
    DEFAULT_DAILY_CAPACITY
}

fn default_max_message_chars() -> usize {
    DEFAULT_MAX_MESSAGE_CHARS
}

fn default_max_reply_chars() -> usize {
    DEFAULT_MAX_REPLY_CHARS
}
