//! Session store port.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatSession;

/// Errors that can occur during session storage operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),
}

/// Port for loading and saving chat sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads a session, or `None` if it never existed or has expired.
    async fn load(&self, id: SessionId) -> Result<Option<ChatSession>, SessionStoreError>;

    /// Saves a session, replacing any previous version.
    async fn save(&self, session: &ChatSession) -> Result<(), SessionStoreError>;
}
