//! SendChatMessageHandler - Command handler for one chat turn.
//!
//! Wraps the dialogue engine with everything a web turn needs: length
//! limits, session load/save, translation through the English pivot and
//! the chat log.

use std::sync::Arc;

use thiserror::Error;

use crate::application::{DialogueEngine, DialogueError};
use crate::domain::conversation::BookingPhase;
use crate::domain::foundation::{BookingId, ErrorCode, Language, SessionId};
use crate::domain::session::{ChatExchange, ChatSession, MessageLimits};
use crate::ports::{ChatLogRepository, SessionStore, SessionStoreError, StorageError, Translator};

use super::SessionLocks;

/// Command to process one visitor message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    /// Existing session, or `None` to start a new one.
    pub session_id: Option<SessionId>,
    pub message: String,
    pub language: Language,
}

/// Result of a processed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatMessageResult {
    pub session_id: SessionId,
    /// Reply in the visitor's language.
    pub reply: String,
    pub phase: BookingPhase,
    /// Set on the turn that completed a booking.
    pub booking_id: Option<BookingId>,
}

/// Errors from the chat use case.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),

    #[error("Conversation state is inconsistent: {0}")]
    Internal(String),
}

impl ChatError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::EmptyMessage => ErrorCode::ValidationFailed,
            ChatError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            ChatError::Storage(_) => ErrorCode::DatabaseError,
            ChatError::SessionStore(_) => ErrorCode::CacheError,
            ChatError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DialogueError> for ChatError {
    fn from(err: DialogueError) -> Self {
        match err {
            DialogueError::Storage(e) => ChatError::Storage(e),
            e @ DialogueError::IncompleteDraft { .. } => ChatError::Internal(e.to_string()),
        }
    }
}

/// Handler for chat turns.
pub struct SendChatMessageHandler {
    engine: DialogueEngine,
    sessions: Arc<dyn SessionStore>,
    chat_log: Arc<dyn ChatLogRepository>,
    translator: Arc<dyn Translator>,
    limits: MessageLimits,
    locks: SessionLocks,
}

impl SendChatMessageHandler {
    pub fn new(
        engine: DialogueEngine,
        sessions: Arc<dyn SessionStore>,
        chat_log: Arc<dyn ChatLogRepository>,
        translator: Arc<dyn Translator>,
        limits: MessageLimits,
    ) -> Self {
        Self {
            engine,
            sessions,
            chat_log,
            translator,
            limits,
            locks: SessionLocks::new(),
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(language = %cmd.language))]
    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, ChatError> {
        // 1. Clip and reject blank input
        let message = self.limits.clip_message(cmd.message.trim());
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        // 2. Serialize turns of the same session, then load or start it
        let session_id = cmd.session_id.unwrap_or_default();
        let _turn = self.locks.acquire(session_id).await;

        let mut session = match self.sessions.load(session_id).await? {
            Some(session) => session,
            None => {
                tracing::debug!(session_id = %session_id, "Starting new chat session");
                ChatSession::new(session_id)
            }
        };

        // 3. Into the pivot language
        let english = if cmd.language.is_pivot() {
            message.to_string()
        } else {
            self.translator
                .translate(message, cmd.language, Language::PIVOT)
                .await
        };

        // 4. Advance the conversation
        let turn = self.engine.step(session.state(), &english).await?;

        // 5. Clip, then back into the visitor's language
        let clipped = self.limits.clip_reply(&turn.reply);
        let reply = if cmd.language.is_pivot() {
            clipped.to_string()
        } else {
            self.translator
                .translate(clipped, Language::PIVOT, cmd.language)
                .await
        };

        // 6. Persist
        let booking_id = turn.booking.as_ref().map(|b| b.id());
        let phase = turn.state.phase;
        let exchange = ChatExchange::new(message, reply.clone(), cmd.language);
        session.record_turn(turn.state, exchange.clone());

        if let Err(e) = self.sessions.save(&session).await {
            if let Some(booking_id) = booking_id {
                tracing::error!(
                    session_id = %session_id,
                    booking_id = %booking_id,
                    error = %e,
                    "Booking saved but session could not be stored"
                );
            }
            return Err(e.into());
        }

        if let Err(e) = self.chat_log.record(session_id, &exchange).await {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to record chat log");
        }

        tracing::info!(
            session_id = %session_id,
            intent = turn.intent.as_str(),
            phase = phase.label(),
            booking_id = ?booking_id,
            "Chat turn processed"
        );

        Ok(SendChatMessageResult {
            session_id,
            reply,
            phase,
            booking_id,
        })
    }
}
