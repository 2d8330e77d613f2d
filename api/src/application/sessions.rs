use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use mesero_core::domain::conversation::entities::ConversationSession;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<ConversationSession>>;

struct SessionEntry {
    session: SharedSession,
    last_active: Instant,
}

/// Live chat sessions. Each session sits behind its own mutex, so one action
/// on a session completes before the next one on it starts. A session that
/// sees no request for `idle_ttl` ends and its history is dropped.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn open(&self) -> ConversationSession {
        let session = ConversationSession::new();
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        sessions.insert(
            session.id,
            SessionEntry {
                session: Arc::new(Mutex::new(session.clone())),
                last_active: now,
            },
        );

        tracing::debug!(session_id = %session.id, "session opened");
        session
    }

    /// Returns the session and marks it active. An idle session is ended
    /// instead.
    pub async fn get(&self, session_id: Uuid) -> Option<SharedSession> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let entry = sessions.get_mut(&session_id)?;
        if now.duration_since(entry.last_active) >= self.idle_ttl {
            sessions.remove(&session_id);
            tracing::debug!(%session_id, "session expired");
            return None;
        }

        entry.last_active = now;
        Some(entry.session.clone())
    }

    /// Ends the session. Returns whether it existed.
    pub async fn close(&self, session_id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&session_id).is_some();
        if removed {
            tracing::debug!(%session_id, "session closed");
        }
        removed
    }

    /// Ends every idle session. Returns how many were dropped.
    pub async fn sweep(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, Instant::now())
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) < self.idle_ttl);

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "idle sessions expired");
        }
        evicted
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Runs [`SessionRegistry::sweep`] every `period` for the life of the
/// process.
pub fn spawn_session_sweeper(registry: SessionRegistry, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            registry.sweep().await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_open_get_close() {
        let registry = SessionRegistry::new(TTL);
        let session = registry.open().await;
        assert_eq!(registry.len().await, 1);

        let shared = registry.get(session.id).await.unwrap();
        shared.lock().await.record_user("hola");

        let again = registry.get(session.id).await.unwrap();
        assert_eq!(again.lock().await.turns().len(), 1);

        assert!(registry.close(session.id).await);
        assert!(!registry.close(session.id).await);
        assert!(registry.get(session.id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let registry = SessionRegistry::new(TTL);
        let session = registry.open().await;
        registry
            .get(session.id)
            .await
            .unwrap()
            .lock()
            .await
            .record_user("hola");

        tokio::time::advance(TTL + Duration::from_secs(1)).await;

        assert!(registry.get(session.id).await.is_none());
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let registry = SessionRegistry::new(TTL);
        let session = registry.open().await;

        for _ in 0..3 {
            tokio::time::advance(TTL / 2).await;
            assert!(registry.get(session.id).await.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_and_sweep_drop_abandoned_sessions() {
        let registry = SessionRegistry::new(TTL);
        for _ in 0..100 {
            registry.open().await;
        }

        tokio::time::advance(TTL).await;
        let fresh = registry.open().await;
        assert_eq!(registry.len().await, 1);

        tokio::time::advance(TTL).await;
        assert_eq!(registry.sweep().await, 1);
        assert!(registry.get(fresh.id).await.is_none());
    }
}
