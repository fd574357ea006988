//! In-memory session store
//!
//! Each session owns exactly one ledger. Nothing is persisted: a session is
//! dropped when it is deleted or after it has been idle for the configured
//! time to live.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use core_kernel::SessionId;
use domain_split::Ledger;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Session store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session limit of {0} reached")]
    CapacityReached(usize),
}

/// One user's bill
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub ledger: Ledger,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl Session {
    fn new(ledger: Ledger) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new_v7(),
            ledger,
            created_at: now,
            last_accessed_at: now,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_accessed_at >= ttl
    }
}

/// Shared, cloneable handle to all live sessions
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    /// Creates an empty store
    pub fn new(ttl: std::time::Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(365 * 100)),
            max_sessions,
        }
    }

    /// Stores a new session around `ledger` and hands the session to `f`
    pub async fn create<R>(
        &self,
        ledger: Ledger,
        f: impl FnOnce(&Session) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().await;
        Self::purge_locked(&mut sessions, self.ttl);

        if sessions.len() >= self.max_sessions {
            return Err(SessionError::CapacityReached(self.max_sessions));
        }

        let session = Session::new(ledger);
        let id = session.id;
        let result = f(&session);
        sessions.insert(id, session);

        info!(session_id = %id, live = sessions.len(), "Session created");
        Ok(result)
    }

    /// Runs `f` against a live session, refreshing its idle timer
    pub async fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&Session) -> R,
    ) -> Result<R, SessionError> {
        self.with_session_mut(id, |session| f(session)).await
    }

    /// Runs `f` against a live session with write access to its ledger
    pub async fn with_session_mut<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        let expired = match sessions.get(&id) {
            Some(session) => session.is_expired(now, self.ttl),
            None => return Err(SessionError::NotFound(id)),
        };
        if expired {
            sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
            return Err(SessionError::NotFound(id));
        }

        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.last_accessed_at = now;
        Ok(f(session))
    }

    /// Ends a session
    pub async fn remove(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(_) => {
                info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    /// Drops every idle session, returning how many were dropped
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::purge_locked(&mut sessions, self.ttl)
    }

    /// Number of sessions currently held, expired or not
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn purge_locked(sessions: &mut HashMap<SessionId, Session>, ttl: Duration) -> usize {
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, ttl));
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, "Purged idle sessions");
        }
        purged
    }
}
