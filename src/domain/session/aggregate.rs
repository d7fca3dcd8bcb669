//! Chat session aggregate.
//!
//! Owned by the session store. The dialogue engine never sees a session,
//! only the [`ConversationState`] inside it.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::{SessionId, Timestamp};

use super::ChatExchange;

/// Maximum number of exchanges kept in a session transcript.
pub const MAX_HISTORY_LEN: usize = 100;

/// Idle lifetime of a session in stores that expire them.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24;

/// One visitor's chat.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `history` holds at most `MAX_HISTORY_LEN` exchanges, oldest dropped first
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    id: SessionId,
    state: ConversationState,
    history: Vec<ChatExchange>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ChatSession {
    /// Starts a session in the `init` phase.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: ConversationState::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn history(&self) -> &[ChatExchange] {
        &self.history
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Applies the outcome of one chat turn: the new state and the exchange
    /// that produced it.
    pub fn record_turn(&mut self, state: ConversationState, exchange: ChatExchange) {
        self.state = state;
        self.history.push(exchange);
        if self.history.len() > MAX_HISTORY_LEN {
            let excess = self.history.len() - MAX_HISTORY_LEN;
            self.history.drain(..excess);
        }
        let now = Timestamp::now();
        if self.updated_at.is_before(&now) {
            self.updated_at = now;
        }
    }
}
