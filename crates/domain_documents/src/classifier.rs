//! Keyword-based document classifier

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::matched_phrases;
use crate::category::{max_keyword_count, DocumentType, CATEGORIES};
use crate::quality::quality_flags;

/// Outcome of classifying one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category
    pub predicted_type: DocumentType,
    /// Display label of the winning category
    pub predicted_type_label: String,
    /// Share of the largest keyword list that matched, in [0, 1]
    pub confidence: f64,
    /// Matched keywords of the winning category, in table order
    pub matched_keywords: Vec<String>,
    /// Missing-field warnings
    pub quality_flags: Vec<String>,
    /// Human-readable explanation
    pub reasoning: String,
}

impl ClassificationResult {
    /// Share of quality checks that passed, in [0, 1]
    pub fn health(&self) -> f64 {
        let total = crate::quality::QUALITY_CHECKS.len();
        let passed = total.saturating_sub(self.quality_flags.len());
        passed as f64 / total as f64
    }
}

/// Classifies document text into one of the fixed categories.
///
/// Each category scores the number of its keywords found as case-insensitive
/// substrings. The first category with the highest score wins, which makes
/// `ClaimForm` the result when nothing matches at all. That case keeps
/// confidence 0.0 and the fixed "No strong document-type patterns" reasoning.
///
/// # Arguments
///
/// * `text` - Raw document text, may be empty
pub fn classify_document(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();

    // first maximum wins, so an all-zero score leaves the first row in place
    let mut best: Option<(DocumentType, Vec<&'static str>)> = None;
    for category in CATEGORIES {
        let matches = matched_phrases(&lowered, category.keywords);
        match &best {
            Some((_, leader)) if matches.len() <= leader.len() => {}
            _ => best = Some((category.doc_type, matches)),
        }
    }
    let (best_type, best_matches) = best.unwrap_or((DocumentType::Other, Vec::new()));

    let best_score = best_matches.len();
    let confidence = confidence(best_score, max_keyword_count());
    let flags = quality_flags(&lowered);

    let mut reasoning = if best_score == 0 {
        "No strong document-type patterns were detected. \
         Classified as 'Other / Unclassified' with low confidence."
            .to_string()
    } else {
        format!(
            "Classified as {} because it contains {} characteristic phrase(s): {}.",
            best_type.label(),
            best_score,
            best_matches.join(", ")
        )
    };
    if !flags.is_empty() {
        reasoning.push_str(" Quality checks: ");
        reasoning.push_str(&flags.join(" "));
    }

    debug!(
        predicted_type = best_type.tag(),
        score = best_score,
        confidence,
        flags = flags.len(),
        "Document classified"
    );

    ClassificationResult {
        predicted_type: best_type,
        predicted_type_label: best_type.label().to_string(),
        confidence,
        matched_keywords: best_matches.into_iter().map(String::from).collect(),
        quality_flags: flags,
        reasoning,
    }
}

/// min(1, score / max_possible), rounded half-to-even to 2 places
fn confidence(score: usize, max_possible: usize) -> f64 {
    if max_possible == 0 {
        return 0.0;
    }
    let ratio = (Decimal::from(score) / Decimal::from(max_possible)).min(Decimal::ONE);
    ratio.round_dp(2).to_f64().unwrap_or(0.0)
}
