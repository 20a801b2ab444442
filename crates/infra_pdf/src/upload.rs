//! Upload acceptance checks

use crate::error::PdfError;

/// Accepts a filename only when it ends in `.pdf`, case-insensitively
pub fn ensure_pdf_filename(filename: &str) -> Result<(), PdfError> {
    if filename.to_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(PdfError::UnsupportedFormat(filename.to_string()))
    }
}
