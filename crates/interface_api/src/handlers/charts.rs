//! Chart handlers

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use domain_claims::NormalizedClaim;
use domain_documents::ClassificationResult;
use domain_fraud::FraudAssessment;

use crate::charts::{self, Bar};
use crate::error::ApiError;

fn png_response(bars: &[Bar]) -> Result<Response, ApiError> {
    let png = charts::render_bar_chart(bars).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// Confidence / health / keyword coverage chart
pub async fn classification_chart(
    Json(result): Json<ClassificationResult>,
) -> Result<Response, ApiError> {
    png_response(&charts::classification_bars(&result))
}

/// Severity chart
pub async fn severity_chart(Json(claim): Json<NormalizedClaim>) -> Result<Response, ApiError> {
    png_response(&charts::severity_bars(&claim))
}

/// Risk level / score chart
pub async fn fraud_chart(Json(assessment): Json<FraudAssessment>) -> Result<Response, ApiError> {
    png_response(&charts::fraud_bars(&assessment))
}
