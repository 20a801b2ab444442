//! Analyzer composition
//!
//! The analyzers never call each other. This module wires them: amounts the
//! normalizer extracted become the fraud scorer's inputs unless the caller
//! supplied their own, and the classifier runs on the document alongside.

use tracing::info;

use core_kernel::excerpt;
use domain_claims::normalize_claim_text;
use domain_documents::classify_document;
use domain_fraud::score_fraud_risk;

use crate::dto::pipeline::{PdfPipelineResponse, PipelineResponse};

/// Characters of source text echoed back by document endpoints
pub const SOURCE_EXCERPT_CHARS: usize = 800;

/// Normalizes `text` and scores it for fraud.
///
/// `claimed_amount` and `estimated_amount` take precedence over the amounts
/// found in the text; each falls back independently.
///
/// Known limitation: an explicit `0` counts as supplied and suppresses the
/// extracted fallback. Clients that use `0` to mean "unknown" must omit the
/// field instead.
pub fn run_text_pipeline(
    text: &str,
    claimed_amount: Option<i64>,
    estimated_amount: Option<i64>,
) -> PipelineResponse {
    let normalized_claim = normalize_claim_text(text);
    let fraud_insights = score_fraud_risk(
        text,
        claimed_amount.or(normalized_claim.claimed_amount),
        estimated_amount.or(normalized_claim.estimated_repair_amount),
    );

    info!(
        loss_type = normalized_claim.loss_type.label(),
        risk = fraud_insights.fraud_risk_level.label(),
        score = fraud_insights.fraud_score,
        "Text pipeline complete"
    );

    PipelineResponse {
        normalized_claim,
        fraud_insights,
    }
}

/// Classifies a document and runs the text pipeline.
///
/// The classifier always sees `document_text`. Normalization and scoring use
/// `claim_text` when it is present and not blank, otherwise the document.
pub fn run_document_pipeline(
    document_text: &str,
    claim_text: Option<&str>,
    claimed_amount: Option<i64>,
    estimated_amount: Option<i64>,
) -> PdfPipelineResponse {
    let document_classification = classify_document(document_text);

    let base_text = claim_text
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(document_text);
    let PipelineResponse {
        normalized_claim,
        fraud_insights,
    } = run_text_pipeline(base_text, claimed_amount, estimated_amount);

    PdfPipelineResponse {
        document_classification,
        normalized_claim,
        fraud_insights,
        source_text_excerpt: excerpt(base_text, SOURCE_EXCERPT_CHARS),
    }
}
