//! In-Memory Session Store
//!
//! Sessions expire after an idle TTL when one is set. Expired entries are
//! hidden from `load` and dropped on the next `save`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::ChatSession;
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Clone)]
struct StoredSession {
    session: ChatSession,
    expires_at: Option<Instant>,
}

impl StoredSession {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory storage for chat sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    /// Store that keeps sessions for the lifetime of the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that forgets a session once it has been idle for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl: Some(ttl),
        }
    }

    /// Get the number of stored sessions, expired or not
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<ChatSession>, SessionStoreError> {
        let now = Instant::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(&id)
            .filter(|stored| !stored.is_expired(now))
            .map(|stored| stored.session.clone()))
    }

    async fn save(&self, session: &ChatSession) -> Result<(), SessionStoreError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        if self.ttl.is_some() {
            let before = sessions.len();
            sessions.retain(|_, stored| !stored.is_expired(now));
            let swept = before - sessions.len();
            if swept > 0 {
                tracing::debug!(swept, "dropped expired chat sessions");
            }
        }
        sessions.insert(
            session.id(),
            StoredSession {
                session: session.clone(),
                expires_at: self.ttl.and_then(|ttl| now.checked_add(ttl)),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{BookingPhase, ConversationState};
    use crate::domain::foundation::Language;
    use crate::domain::session::ChatExchange;

    #[tokio::test]
    async fn load_missing_returns_none() {
        let store = InMemorySessionStore::new();
        assert!(store.load(SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_version() {
        let store = InMemorySessionStore::new();
        let mut session = ChatSession::new(SessionId::new());
        store.save(&session).await.unwrap();

        session.record_turn(
            ConversationState::in_phase(BookingPhase::Ready),
            ChatExchange::new("hello", "Hi there!", Language::En),
        );
        store.save(&session).await.unwrap();

        let loaded = store.load(session.id()).await.unwrap().unwrap();
        assert_eq!(loaded.state().phase, BookingPhase::Ready);
        assert_eq!(store.session_count().await, 1);
    }

    // ════════════════════════════════════════════════════════════════════
    // Expiry
    // ════════════════════════════════════════════════════════════════════

    mod expiry {
        use super::*;

        #[tokio::test]
        async fn idle_session_is_gone_after_ttl() {
            let store = InMemorySessionStore::with_ttl(Duration::ZERO);
            let session = ChatSession::new(SessionId::new());
            store.save(&session).await.unwrap();

            assert!(store.load(session.id()).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn saving_drops_expired_sessions() {
            let store = InMemorySessionStore::with_ttl(Duration::ZERO);
            let first = ChatSession::new(SessionId::new());
            let second = ChatSession::new(SessionId::new());

            store.save(&first).await.unwrap();
            store.save(&second).await.unwrap();

            assert_eq!(store.session_count().await, 1);
        }

        #[tokio::test]
        async fn session_within_ttl_is_kept() {
            let store = InMemorySessionStore::with_ttl(Duration::from_secs(3600));
            let first = ChatSession::new(SessionId::new());
            let second = ChatSession::new(SessionId::new());

            store.save(&first).await.unwrap();
            store.save(&second).await.unwrap();

            assert!(store.load(first.id()).await.unwrap().is_some());
            assert_eq!(store.session_count().await, 2);
        }

        #[tokio::test]
        async fn saving_again_extends_the_ttl() {
            let store = InMemorySessionStore::with_ttl(Duration::from_secs(3600));
            let session = ChatSession::new(SessionId::new());
            store.save(&session).await.unwrap();
            let first_expiry = store.sessions.read().await[&session.id()].expires_at;

            tokio::time::sleep(Duration::from_millis(5)).await;
            store.save(&session).await.unwrap();
            let second_expiry = store.sessions.read().await[&session.id()].expires_at;

            assert!(second_expiry > first_expiry);
        }
    }
}
