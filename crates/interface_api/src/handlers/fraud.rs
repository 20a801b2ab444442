//! Fraud scoring handlers

use axum::Json;
use validator::Validate;

use domain_fraud::{score_fraud_risk, FraudAssessment};

use crate::error::ApiError;
use crate::dto::fraud::FraudRequest;

/// Scores claim text for fraud risk with optional amounts
pub async fn fraud_score(
    Json(request): Json<FraudRequest>,
) -> Result<Json<FraudAssessment>, ApiError> {
    request.validate()?;
    Ok(Json(score_fraud_risk(
        &request.text,
        request.claimed_amount,
        request.estimated_amount,
    )))
}
