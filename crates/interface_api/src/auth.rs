//! Authentication: session tokens and demo credentials

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::SessionId;

use crate::sessions::SessionStore;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Session the token belongs to
    pub sid: SessionId,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Session revoked")]
    SessionRevoked,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Failed to create token: {0}")]
    TokenCreation(String),
    #[error("Session store unavailable")]
    SessionStore,
}

/// A freshly issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub session_id: SessionId,
    pub expires_at: DateTime<Utc>,
}

/// Creates a new JWT token bound to a session
///
/// # Arguments
///
/// * `username` - Authenticated user
/// * `session_id` - Session the token belongs to
/// * `issued_at` - Issue time
/// * `expires_at` - Expiry time
/// * `secret` - JWT secret key
pub fn create_token(
    username: &str,
    session_id: SessionId,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    secret: &str,
) -> Result<String, AuthError> {
    let claims = Claims {
        sub: username.to_string(),
        sid: session_id,
        exp: expires_at.timestamp(),
        iat: issued_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Validates a JWT token
///
/// Only checks signature and expiry; whether the session is still live is
/// the session store's concern.
///
/// # Arguments
///
/// * `token` - The JWT token to validate
/// * `secret` - JWT secret key
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Checks submitted credentials against the configured demo account
pub fn check_credentials(
    username: &str,
    password: &str,
    expected_username: &str,
    expected_password: &str,
) -> Result<(), AuthError> {
    if username == expected_username && password == expected_password {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Expiry of a token issued at `issued_at`, saturating at the latest
/// representable time
pub fn expiry_from(issued_at: DateTime<Utc>, lifetime_secs: u64) -> DateTime<Utc> {
    i64::try_from(lifetime_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Opens a session for `username` and issues a token bound to it.
///
/// Expired sessions are purged first so the store does not grow without
/// bound under repeated logins.
pub fn issue_token(
    sessions: &SessionStore,
    username: &str,
    lifetime_secs: u64,
    secret: &str,
) -> Result<IssuedToken, AuthError> {
    let now = Utc::now();
    sessions.purge_expired(now)?;

    let expires_at = expiry_from(now, lifetime_secs);
    let session_id = sessions.open(username, expires_at)?;
    let token = create_token(username, session_id, now, expires_at, secret)?;

    Ok(IssuedToken {
        token,
        session_id,
        expires_at,
    })
}
