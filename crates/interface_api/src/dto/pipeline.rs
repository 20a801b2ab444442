//! Pipeline DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::NormalizedClaim;
use domain_documents::ClassificationResult;
use domain_fraud::FraudAssessment;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct PipelineRequest {
    #[validate(custom(function = "not_blank"), length(max = 1000000))]
    pub claim_text: String,
    pub claimed_amount: Option<i64>,
    pub estimated_amount: Option<i64>,
}

/// Normalized claim and fraud insights for one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub normalized_claim: NormalizedClaim,
    pub fraud_insights: FraudAssessment,
}

/// Full document pipeline result
#[derive(Debug, Serialize, Deserialize)]
pub struct PdfPipelineResponse {
    pub document_classification: ClassificationResult,
    pub normalized_claim: NormalizedClaim,
    pub fraud_insights: FraudAssessment,
    pub source_text_excerpt: String,
}
