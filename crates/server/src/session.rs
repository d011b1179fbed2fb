//! Session Management
//!
//! Maps opaque session ids onto per-session conversation contexts. Each
//! context sits behind its own mutex so the core only ever sees one request
//! per session at a time; the dataset itself is immutable and shared.
//!
//! Idle sessions expire after the configured TTL, checked lazily on access
//! and by a periodic sweep.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use travel_agent_core::ConversationContext;

/// One conversation session
pub struct Session {
    /// Opaque session id handed to the client
    pub id: String,
    /// The accumulated dialogue state; lock held for the duration of a turn
    pub context: Mutex<ConversationContext>,
    last_activity: Mutex<Instant>,
}

impl Session {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4().to_string(),
            context: Mutex::new(ConversationContext::new()),
            last_activity: Mutex::new(Instant::now()),
        })
    }

    /// Mark the session as just used
    pub fn touch(&self) {
        *self.last_activity.lock() = Instant::now();
    }

    /// Time since the last use
    pub fn idle_for(&self) -> Duration {
        self.last_activity.lock().elapsed()
    }
}

/// In-memory session registry with TTL expiry
pub struct SessionManager {
    sessions: DashMap<String, Arc<Session>>,
    ttl: Duration,
}

impl SessionManager {
    /// Create a manager expiring sessions idle longer than `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a fresh session and register it
    pub fn create(&self) -> Arc<Session> {
        let session = Session::new();
        self.sessions.insert(session.id.clone(), Arc::clone(&session));
        tracing::debug!(session_id = %session.id, "session created");
        session
    }

    /// Look up a live session, touching it; expired sessions are dropped
    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        let session = self.sessions.get(id).map(|s| Arc::clone(s.value()))?;
        if session.idle_for() > self.ttl {
            self.sessions.remove(id);
            tracing::debug!(session_id = %id, "session expired on access");
            return None;
        }
        session.touch();
        Some(session)
    }

    /// Resolve the client-provided id, or start a new session
    ///
    /// An unknown or expired id also starts a new session: the client gets
    /// the fresh id back and continues with a clean context.
    pub fn get_or_create(&self, id: Option<&str>) -> Arc<Session> {
        match id.and_then(|id| self.get(id)) {
            Some(session) => session,
            None => self.create(),
        }
    }

    /// Remove a session outright
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drop all sessions idle longer than the TTL
    pub fn sweep(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.idle_for() <= self.ttl);
        let dropped = before.saturating_sub(self.sessions.len());
        if dropped > 0 {
            tracing::info!(dropped, "swept expired sessions");
        }
        dropped
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are registered
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_roundtrip() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let session = manager.create();

        let found = manager.get(&session.id).unwrap();
        assert_eq!(found.id, session.id);
        assert!(manager.get("no-such-id").is_none());
    }

    #[test]
    fn test_context_survives_across_lookups() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let session = manager.create();
        session.context.lock().set_budget("Luxury");

        let found = manager.get(&session.id).unwrap();
        assert_eq!(found.context.lock().budget(), Some("Luxury"));
    }

    #[test]
    fn test_expired_session_is_dropped_on_access() {
        let manager = SessionManager::new(Duration::from_millis(0));
        let session = manager.create();
        std::thread::sleep(Duration::from_millis(5));

        assert!(manager.get(&session.id).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_get_or_create_starts_fresh_for_unknown_id() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let session = manager.get_or_create(Some("stale-id"));

        assert_ne!(session.id, "stale-id");
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_sweep_drops_only_idle_sessions() {
        let manager = SessionManager::new(Duration::from_millis(20));
        let idle = manager.create();
        std::thread::sleep(Duration::from_millis(30));
        let fresh = manager.create();

        assert_eq!(manager.sweep(), 1);
        assert!(manager.get(&fresh.id).is_some());
        assert!(manager.get(&idle.id).is_none());
    }
}
