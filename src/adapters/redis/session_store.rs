//! Redis-backed session store for multi-instance deployments.
//!
//! Each session is one JSON string under `museum:session:{id}`, written with
//! `SET .. EX` so idle sessions expire on their own. Every save refreshes the
//! expiry.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatSession;
use crate::ports::{SessionStore, SessionStoreError};

/// Redis session store with sliding expiry.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str, ttl_secs: u64) -> Result<Self, SessionStoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| SessionStoreError::Unavailable(format!("Invalid Redis URL: {}", e)))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| SessionStoreError::Unavailable(format!("Failed to connect: {}", e)))?;
        Ok(Self::new(conn, ttl_secs))
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    fn key(id: SessionId) -> String {
        format!("museum:session:{}", id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<ChatSession>, SessionStoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|e: redis::RedisError| SessionStoreError::Unavailable(e.to_string()))?;

        raw.map(|json| decode(&json)).transpose()
    }

    async fn save(&self, session: &ChatSession) -> Result<(), SessionStoreError> {
        let json = encode(session)?;
        let mut conn = self.conn.clone();

        redis::cmd("SET")
            .arg(Self::key(session.id()))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs.max(1))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        tracing::trace!(session_id = %session.id(), ttl_secs = self.ttl_secs, "Session stored");
        Ok(())
    }
}

fn encode(session: &ChatSession) -> Result<String, SessionStoreError> {
    serde_json::to_string(session).map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))
}

fn decode(json: &str) -> Result<ChatSession, SessionStoreError> {
    serde_json::from_str(json).map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingDate, TicketCount};
    use crate::domain::conversation::{BookingPhase, ConversationState};
    use crate::domain::foundation::Language;
    use crate::domain::session::ChatExchange;

    #[test]
    fn keys_are_namespaced() {
        let id: SessionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(
            RedisSessionStore::key(id),
            "museum:session:550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn stored_json_restores_the_draft() {
        let mut session = ChatSession::new(SessionId::new());
        session.record_turn(
            ConversationState {
                booking_date: Some(BookingDate::parse("15/08/2025").unwrap()),
                ticket_count: Some(TicketCount::new(4).unwrap()),
                ..ConversationState::in_phase(BookingPhase::BookingType)
            },
            ChatExchange::new("4 tickets", "Regular or special?", Language::En),
        );

        let restored = decode(&encode(&session).unwrap()).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        assert!(matches!(
            decode("{not json"),
            Err(SessionStoreError::DeserializationFailed(_))
        ));
    }
}
