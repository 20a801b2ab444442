//! PDF error types

use thiserror::Error;

/// Errors that can occur while accepting or reading an uploaded document
#[derive(Debug, Error)]
pub enum PdfError {
    /// The upload is not a PDF by name
    #[error("Only PDF files are supported for now.")]
    UnsupportedFormat(String),

    /// The bytes could not be parsed as a PDF
    #[error("Failed to read PDF: {0}")]
    Parse(String),
}

impl PdfError {
    /// Checks if this error was caused by the file type rather than its content
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, PdfError::UnsupportedFormat(_))
    }
}

impl From<lopdf::Error> for PdfError {
    fn from(error: lopdf::Error) -> Self {
        PdfError::Parse(error.to_string())
    }
}
