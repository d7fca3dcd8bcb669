//! One round-trip of the chat.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Language, Timestamp};

/// A visitor message and the assistant's answer, in the visitor's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: String,
    pub bot_response: String,
    pub language: Language,
    pub timestamp: Timestamp,
}

impl ChatExchange {
    pub fn new(
        user_message: impl Into<String>,
        bot_response: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            language,
            timestamp: Timestamp::now(),
        }
    }
}
