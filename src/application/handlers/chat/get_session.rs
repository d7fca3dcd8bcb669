//! GetChatSessionHandler - Query handler for a session snapshot.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatSession;
use crate::ports::SessionStore;

use super::ChatError;

/// Query for one chat session.
#[derive(Debug, Clone, Copy)]
pub struct GetChatSessionQuery {
    pub session_id: SessionId,
}

/// Handler for reading chat sessions.
pub struct GetChatSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetChatSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetChatSessionQuery) -> Result<ChatSession, ChatError> {
        self.sessions
            .load(query.session_id)
            .await?
            .ok_or(ChatError::SessionNotFound(query.session_id))
    }
}
