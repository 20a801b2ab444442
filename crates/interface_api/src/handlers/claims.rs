//! Claims handlers

use axum::Json;
use validator::Validate;

use domain_claims::{normalize_claim_text, NormalizedClaim};

use crate::error::ApiError;
use crate::dto::claims::ClaimTextRequest;

/// Normalizes a free-text claim description
pub async fn normalize_claim(
    Json(request): Json<ClaimTextRequest>,
) -> Result<Json<NormalizedClaim>, ApiError> {
    request.validate()?;
    Ok(Json(normalize_claim_text(&request.text)))
}
