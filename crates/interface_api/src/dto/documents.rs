//! Document DTOs

use serde::{Deserialize, Serialize};

use domain_documents::ClassificationResult;

/// Classification plus the leading text the classifier saw
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentClassificationResponse {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    pub raw_text_excerpt: String,
}
