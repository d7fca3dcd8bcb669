//! PostgreSQL implementation of ChatLogRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatExchange;
use crate::ports::{ChatLogRepository, StorageError};

use super::booking_repository::storage_error;

/// Appends chat exchanges to the `chat_logs` table.
#[derive(Clone)]
pub struct PostgresChatLogRepository {
    pool: PgPool,
}

impl PostgresChatLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatLogRepository for PostgresChatLogRepository {
    async fn record(
        &self,
        session_id: SessionId,
        exchange: &ChatExchange,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO chat_logs (
                session_id, user_message, bot_response, language, created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(&exchange.user_message)
        .bind(&exchange.bot_response)
        .bind(exchange.language.code())
        .bind(exchange.timestamp.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to insert chat log", e))?;

        Ok(())
    }
}
