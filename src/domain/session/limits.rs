//! Length limits applied to chat text entering and leaving the engine.

/// Default cap on an incoming message, in characters.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 200;

/// Default cap on an outgoing reply, in characters.
pub const DEFAULT_MAX_REPLY_CHARS: usize = 350;

/// Character caps for messages entering and replies leaving the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimits {
    pub max_message_chars: usize,
    pub max_reply_chars: usize,
}

impl Default for MessageLimits {
    fn default() -> Self {
        Self {
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            max_reply_chars: DEFAULT_MAX_REPLY_CHARS,
        }
    }
}

impl MessageLimits {
    pub fn clip_message<'a>(&self, message: &'a str) -> &'a str {
        truncate_chars(message, self.max_message_chars)
    }

    pub fn clip_reply<'a>(&self, reply: &'a str) -> &'a str {
        truncate_chars(reply, self.max_reply_chars)
    }
}

/// Returns at most the first `max` characters of `text`.
///
/// Counts `char`s, not bytes, so multi-byte scripts are never split.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
