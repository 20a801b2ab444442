//! Document classification handlers

use axum::{extract::Multipart, Json};
use tracing::info;

use core_kernel::excerpt;
use domain_documents::classify_document;

use crate::error::ApiError;
use crate::dto::documents::DocumentClassificationResponse;
use crate::pipeline::SOURCE_EXCERPT_CHARS;
use crate::upload::{extract_upload_text, read_upload};

/// Classifies an uploaded PDF
pub async fn classify(multipart: Multipart) -> Result<Json<DocumentClassificationResponse>, ApiError> {
    let upload = read_upload(multipart).await?;
    let text = extract_upload_text(&upload.filename, upload.bytes).await?;

    let classification = classify_document(text.as_str());
    info!(
        file = %upload.filename,
        predicted_type = classification.predicted_type.tag(),
        confidence = classification.confidence,
        "Document classified"
    );

    Ok(Json(DocumentClassificationResponse {
        classification,
        raw_text_excerpt: excerpt(text.as_str(), SOURCE_EXCERPT_CHARS),
    }))
}
