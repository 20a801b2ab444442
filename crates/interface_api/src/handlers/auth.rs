//! Login and logout handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::{info, warn};
use validator::Validate;

use crate::{AppState, error::ApiError};
use crate::auth::{check_credentials, issue_token, Claims};
use crate::dto::auth::{LoginRequest, LoginResponse};

/// Checks demo credentials and issues a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    check_credentials(
        &request.username,
        &request.password,
        &state.config.demo_username,
        &state.config.demo_password,
    )
    .map_err(|e| {
        warn!(user = %request.username, "Login rejected");
        ApiError::from(e)
    })?;

    let issued = issue_token(
        &state.sessions,
        &request.username,
        state.config.jwt_expiration_secs,
        &state.config.jwt_secret,
    )?;

    info!(user = %request.username, session = %issued.session_id, "Login succeeded");

    Ok(Json(LoginResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.jwt_expiration_secs,
        expires_at: issued.expires_at,
    }))
}

/// Revokes the session of the calling token
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, ApiError> {
    state.sessions.revoke(&claims.sid)?;
    info!(user = %claims.sub, session = %claims.sid, "Logged out");
    Ok(StatusCode::NO_CONTENT)
}
