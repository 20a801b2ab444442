//! Request and response DTOs

pub mod auth;
pub mod claims;
pub mod documents;
pub mod fraud;
pub mod pipeline;

use validator::ValidationError;

use core_kernel::AnalysisText;

/// Rejects empty or whitespace-only text fields
pub fn not_blank(text: &str) -> Result<(), ValidationError> {
    AnalysisText::new(text)
        .map(|_| ())
        .map_err(|_| ValidationError::new("blank").with_message("must not be blank".into()))
}
