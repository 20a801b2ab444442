//! Pipeline handlers

use axum::{extract::Multipart, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::dto::pipeline::{PdfPipelineResponse, PipelineRequest, PipelineResponse};
use crate::pipeline::{run_document_pipeline, run_text_pipeline};
use crate::upload::{extract_upload_text, read_upload};

/// Normalization and fraud scoring for a description without a document
pub async fn pipeline_from_text(
    Json(request): Json<PipelineRequest>,
) -> Result<Json<PipelineResponse>, ApiError> {
    request.validate()?;
    Ok(Json(run_text_pipeline(
        &request.claim_text,
        request.claimed_amount,
        request.estimated_amount,
    )))
}

/// Classification, normalization and fraud scoring for an uploaded PDF
pub async fn pipeline_from_pdf(multipart: Multipart) -> Result<Json<PdfPipelineResponse>, ApiError> {
    let upload = read_upload(multipart).await?;
    let text = extract_upload_text(&upload.filename, upload.bytes).await?;

    Ok(Json(run_document_pipeline(
        text.as_str(),
        upload.claim_text.as_deref(),
        upload.claimed_amount,
        upload.estimated_amount,
    )))
}
