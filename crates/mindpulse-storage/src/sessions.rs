//! Keyed chat session storage with expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::{SignedDuration, Timestamp};
use mindpulse_core::models::chat_history::{ChatHistoryMessage, ChatSession};
use tracing::debug;

use crate::error::StorageError;

/// Most messages kept per session; older ones are dropped first.
pub const MAX_HISTORY: usize = 10;

pub const MAX_SESSION_ID_LEN: usize = 128;

/// Get, append to and evict chat sessions by id.
///
/// Sessions idle for longer than the store's TTL behave as if they were
/// never created.
pub trait SessionStore: Send + Sync {
    /// The live session for `id`, if any.
    fn history(&self, id: &str) -> Result<Option<ChatSession>, StorageError>;

    /// Append messages to a session, creating it if needed, and return the
    /// session as stored.
    fn append(
        &self,
        id: &str,
        messages: Vec<ChatHistoryMessage>,
    ) -> Result<ChatSession, StorageError>;

    /// Remove a session. Returns whether a live session existed.
    fn evict(&self, id: &str) -> Result<bool, StorageError>;

    /// Number of live sessions.
    fn active_sessions(&self) -> Result<usize, StorageError>;

    /// Drop expired sessions and return how many were removed.
    fn purge_expired(&self) -> Result<usize, StorageError>;
}

/// Session ids are opaque, but must be non-empty, bounded and printable.
pub fn validate_session_id(id: &str) -> Result<(), StorageError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSessionId(id.to_string()))
    }
}

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Process-local [`SessionStore`].
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, ChatSession>>,
    ttl: SignedDuration,
    clock: Clock,
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl InMemorySessionStore {
    pub fn new(ttl: SignedDuration) -> Self {
        Self::with_clock(ttl, Arc::new(Timestamp::now))
    }

    pub fn with_clock(ttl: SignedDuration, clock: Clock) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    // A panic while holding the lock cannot leave a session half-written,
    // so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, ChatSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, session: &ChatSession, now: Timestamp) -> bool {
        now.duration_since(session.updated_at) > self.ttl
    }
}

impl SessionStore for InMemorySessionStore {
    fn history(&self, id: &str) -> Result<Option<ChatSession>, StorageError> {
        validate_session_id(id)?;
        let now = (self.clock)();
        let mut sessions = self.lock();

        let Some(session) = sessions.get(id) else {
            return Ok(None);
        };
        if !self.is_expired(session, now) {
            return Ok(Some(session.clone()));
        }

        sessions.remove(id);
        debug!(session_id = id, "session expired");
        Ok(None)
    }

    fn append(
        &self,
        id: &str,
        messages: Vec<ChatHistoryMessage>,
    ) -> Result<ChatSession, StorageError> {
        validate_session_id(id)?;
        let now = (self.clock)();
        let mut sessions = self.lock();

        if sessions.get(id).is_some_and(|s| self.is_expired(s, now)) {
            sessions.remove(id);
        }

        let session = sessions.entry(id.to_string()).or_insert_with(|| ChatSession {
            id: id.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        });

        session.messages.extend(messages);
        if session.messages.len() > MAX_HISTORY {
            let excess = session.messages.len() - MAX_HISTORY;
            session.messages.drain(..excess);
        }
        session.updated_at = now;

        Ok(session.clone())
    }

    fn evict(&self, id: &str) -> Result<bool, StorageError> {
        validate_session_id(id)?;
        let now = (self.clock)();
        let removed = self.lock().remove(id);
        Ok(removed.is_some_and(|s| !self.is_expired(&s, now)))
    }

    fn active_sessions(&self) -> Result<usize, StorageError> {
        let now = (self.clock)();
        Ok(self
            .lock()
            .values()
            .filter(|s| !self.is_expired(s, now))
            .count())
    }

    fn purge_expired(&self) -> Result<usize, StorageError> {
        let now = (self.clock)();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, "expired sessions purged");
        }
        Ok(purged)
    }
}
