//! In-Memory Chat Log

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatExchange;
use crate::ports::{ChatLogRepository, StorageError};

/// Append-only in-memory chat log
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatLog {
    entries: Arc<RwLock<Vec<(SessionId, ChatExchange)>>>,
}

impl InMemoryChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Exchanges recorded for one session, in order
    pub async fn for_session(&self, session_id: SessionId) -> Vec<ChatExchange> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|(id, _)| *id == session_id)
            .map(|(_, exchange)| exchange.clone())
            .collect()
    }
}

#[async_trait]
impl ChatLogRepository for InMemoryChatLog {
    async fn record(
        &self,
        session_id: SessionId,
        exchange: &ChatExchange,
    ) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .push((session_id, exchange.clone()));
        Ok(())
    }
}
