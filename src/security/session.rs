use crate::utils::auth::generate_token;
use crate::utils::time::is_expired;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// An authenticated browser session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Token carried in the session cookie
    pub token: String,
    /// Username of the authenticated account
    pub username: String,
    /// Per-session CSRF token for authenticated forms
    pub csrf_token: String,
    /// Unix timestamp of session creation
    pub created_at: i64,
}

/// In-memory session store with TTL expiry.
///
/// Expiry is enforced lazily on lookup and swept by a periodic background
/// task. Tokens are 32 random bytes, hex encoded.
pub struct SessionStore {
    sessions: DashMap<String, Arc<Session>>,
    ttl: i64,
}

impl SessionStore {
    pub fn new(ttl: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a session for an authenticated account.
    pub fn create(&self, username: &str, current_time: i64) -> Arc<Session> {
        let session = Arc::new(Session {
            token: generate_token(),
            username: username.to_string(),
            csrf_token: generate_token(),
            created_at: current_time,
        });

        self.sessions
            .insert(session.token.clone(), Arc::clone(&session));

        session
    }

    /// Look up a session by token. Expired sessions are removed and treated
    /// as absent.
    pub fn get(&self, token: &str, current_time: i64) -> Option<Arc<Session>> {
        let session = self
            .sessions
            .get(token)
            .map(|entry| Arc::clone(entry.value()))?;

        if is_expired(session.created_at, self.ttl, current_time) {
            self.sessions.remove(token);
            return None;
        }

        Some(session)
    }

    /// Remove a session, returning it if it existed.
    pub fn remove(&self, token: &str) -> Option<Arc<Session>> {
        self.sessions.remove(token).map(|(_, session)| session)
    }

    /// Drop all expired sessions. Returns the number removed.
    ///
    /// Removals are counted inside the retain pass; comparing store sizes
    /// before and after would miscount when logins insert concurrently.
    pub fn cleanup_expired(&self, current_time: i64) -> usize {
        let removed = AtomicUsize::new(0);

        self.sessions.retain(|_, session| {
            if is_expired(session.created_at, self.ttl, current_time) {
                removed.fetch_add(1, Ordering::Relaxed);
                false
            } else {
                true
            }
        });

        removed.into_inner()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
