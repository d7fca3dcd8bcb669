//! Chat log port.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatExchange;

use super::StorageError;

/// Append-only record of every exchange, kept apart from session storage so
/// it outlives the session.
#[async_trait]
pub trait ChatLogRepository: Send + Sync {
    async fn record(&self, session_id: SessionId, exchange: &ChatExchange)
        -> Result<(), StorageError>;
}
