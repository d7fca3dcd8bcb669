//! Per-session serialization of chat turns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

/// Hands out one async mutex per session so two messages for the same
/// session are processed one after the other, in arrival order.
///
/// Entries are dropped once no turn holds or waits on them.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>,
}

/// Held for the duration of one turn.
pub struct SessionTurnGuard<'a> {
    owner: &'a SessionLocks,
    session_id: SessionId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other turn for `session_id` is running.
    pub async fn acquire(&self, session_id: SessionId) -> SessionTurnGuard<'_> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.entry(session_id).or_default().clone()
        };
        let guard = lock.lock_owned().await;
        SessionTurnGuard {
            owner: self,
            session_id,
            guard: Some(guard),
        }
    }

    /// Number of sessions with a turn running or queued.
    #[cfg(test)]
    fn active(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn release(&self, session_id: SessionId) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(lock) = locks.get(&session_id) {
            // Only the map still refers to it: nobody is waiting.
            if Arc::strong_count(lock) == 1 {
                locks.remove(&session_id);
            }
        }
    }
}

impl Drop for SessionTurnGuard<'_> {
    fn drop(&mut self) {
        // Unlock first so the strong count no longer includes our guard.
        self.guard.take();
        self.owner.release(self.session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn released_locks_are_forgotten() {
        let locks = SessionLocks::new();
        {
            let _guard = locks.acquire(SessionId::new()).await;
            assert_eq!(locks.active(), 1);
        }
        assert_eq!(locks.active(), 0);
    }

    #[tokio::test]
    async fn different_sessions_do_not_block_each_other() {
        let locks = SessionLocks::new();
        let _a = locks.acquire(SessionId::new()).await;
        let b = tokio::time::timeout(Duration::from_millis(100), locks.acquire(SessionId::new()))
            .await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn same_session_waits_for_the_running_turn() {
        let locks = Arc::new(SessionLocks::new());
        let id = SessionId::new();
        let first = locks.acquire(id).await;

        let waiting = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _second = locks.acquire(id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        drop(first);
        tokio::time::timeout(Duration::from_secs(1), waiting)
            .await
            .expect("second turn proceeds")
            .expect("task completes");
        assert_eq!(locks.active(), 0);
    }
}
