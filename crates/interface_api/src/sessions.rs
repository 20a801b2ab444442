//! In-memory session store
//!
//! Sessions live only as long as the process. Every issued token carries its
//! session id, and a token is honoured only while its session is present
//! here, which is what makes logout effective before the token expires.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use core_kernel::SessionId;

use crate::auth::AuthError;

/// A live login session
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Shared map of live sessions
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Session>>, AuthError> {
        self.sessions.lock().map_err(|_| AuthError::SessionStore)
    }

    /// Opens a new session for `username`
    pub fn open(&self, username: &str, expires_at: DateTime<Utc>) -> Result<SessionId, AuthError> {
        let session_id = SessionId::new_v7();
        self.lock()?.insert(
            session_id,
            Session {
                username: username.to_string(),
                expires_at,
            },
        );
        debug!(session = %session_id, user = username, "Session opened");
        Ok(session_id)
    }

    /// Checks that the session exists and has not expired
    pub fn ensure_active(&self, session_id: &SessionId, now: DateTime<Utc>) -> Result<(), AuthError> {
        match self.lock()?.get(session_id) {
            Some(session) if session.expires_at > now => Ok(()),
            Some(_) => Err(AuthError::TokenExpired),
            None => Err(AuthError::SessionRevoked),
        }
    }

    /// Ends a session. Returns false if it was not open.
    pub fn revoke(&self, session_id: &SessionId) -> Result<bool, AuthError> {
        let removed = self.lock()?.remove(session_id).is_some();
        debug!(session = %session_id, removed, "Session revoked");
        Ok(removed)
    }

    /// Drops every session that expired at or before `now`
    pub fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AuthError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        Ok(before - sessions.len())
    }

    /// Number of sessions currently held
    pub fn len(&self) -> Result<usize, AuthError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AuthError> {
        Ok(self.len()? == 0)
    }
}
