//! Multipart document uploads

use axum::body::Bytes;
use axum::extract::Multipart;
use tracing::debug;

use core_kernel::AnalysisText;
use infra_pdf::{ensure_pdf_filename, extract_text_from_pdf};

use crate::error::ApiError;

/// Fields of a document upload form
#[derive(Debug, Default)]
pub struct DocumentUpload {
    pub filename: String,
    pub bytes: Bytes,
    pub claim_text: Option<String>,
    pub claimed_amount: Option<i64>,
    pub estimated_amount: Option<i64>,
}

/// Reads a multipart form with a required `file` part and optional
/// `claim_text`, `claimed_amount` and `estimated_amount` parts.
pub async fn read_upload(mut multipart: Multipart) -> Result<DocumentUpload, ApiError> {
    let mut upload = DocumentUpload::default();
    let mut has_file = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                upload.filename = field.file_name().unwrap_or_default().to_string();
                upload.bytes = field.bytes().await?;
                has_file = true;
            }
            "claim_text" => upload.claim_text = Some(field.text().await?),
            "claimed_amount" => upload.claimed_amount = parse_amount(&name, &field.text().await?)?,
            "estimated_amount" => upload.estimated_amount = parse_amount(&name, &field.text().await?)?,
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    if !has_file {
        return Err(ApiError::BadRequest("Missing 'file' field".to_string()));
    }
    Ok(upload)
}

/// Parses an optional integer form value; an empty value means absent
fn parse_amount(field: &str, value: &str) -> Result<Option<i64>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ApiError::BadRequest(format!("'{}' must be an integer", field)))
}

/// Checks the filename, extracts the PDF text off the async runtime, and
/// rejects documents with no text.
pub async fn extract_upload_text(filename: &str, bytes: Bytes) -> Result<AnalysisText, ApiError> {
    ensure_pdf_filename(filename)?;

    let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("PDF extraction task failed: {}", e)))??;

    AnalysisText::new(text)
        .map_err(|_| ApiError::BadRequest("Could not extract text from PDF.".to_string()))
}
