//! Fraud risk scorer

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::contains_any;
use crate::signals::{AmountCheck, RED_FLAGS};

/// Highest score the scorer can produce: every red flag plus the large
/// amount penalty.
pub const MAX_SCORE: u32 = 9;

/// Fraud risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps a score onto a level: 4+ High, 2-3 Medium, else Low
    pub fn from_score(score: u32) -> Self {
        if score >= 4 {
            RiskLevel::High
        } else if score >= 2 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of fraud scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub fraud_risk_level: RiskLevel,
    pub fraud_score: u32,
    /// Triggered signal explanations, in check order
    pub reasons: Vec<String>,
    pub explanation: String,
}

/// Scores claim text for fraud risk.
///
/// # Arguments
///
/// * `text` - Claim description, may be empty
/// * `claimed_amount` - Amount claimed, if known
/// * `estimated_amount` - Repair estimate, if known
///
/// The amount comparison only runs when both amounts are present.
pub fn score_fraud_risk(
    text: &str,
    claimed_amount: Option<i64>,
    estimated_amount: Option<i64>,
) -> FraudAssessment {
    let lowered = text.to_lowercase();
    let mut score = 0;
    let mut reasons = Vec::new();

    for flag in RED_FLAGS {
        if contains_any(&lowered, flag.phrases) {
            debug!(signal = flag.name, weight = flag.weight, "Red flag triggered");
            score += flag.weight;
            reasons.push(flag.reason.to_string());
        }
    }

    let amount_check = AmountCheck::evaluate(claimed_amount, estimated_amount);
    if let Some(reason) = amount_check.reason() {
        score += amount_check.weight();
        reasons.push(reason);
    }

    let level = RiskLevel::from_score(score);
    let detail = if reasons.is_empty() {
        "No obvious red flags found in text.".to_string()
    } else {
        reasons.join(" ")
    };
    let explanation = format!(
        "Overall fraud risk scored as {} based on {} signals. {}",
        level,
        reasons.len(),
        detail
    );

    debug!(score, level = level.label(), signals = reasons.len(), "Fraud risk scored");

    FraudAssessment {
        fraud_risk_level: level,
        fraud_score: score,
        reasons,
        explanation,
    }
}
