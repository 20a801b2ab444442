//! Claim description normalizer

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::excerpt;
use crate::amounts::extract_amounts;
use crate::claim::{AffectedAsset, LossType, Severity};

/// Number of characters kept in `raw_text_excerpt`
pub const EXCERPT_CHARS: usize = 400;

/// Structured view of a free-text claim description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedClaim {
    /// Type of loss
    pub loss_type: LossType,
    /// Severity of damage
    pub severity: Severity,
    /// Asset affected
    pub affected_asset: AffectedAsset,
    /// Claimed amount
    pub claimed_amount: Option<i64>,
    /// Estimated repair amount
    pub estimated_repair_amount: Option<i64>,
    /// Leading characters of the original text
    pub raw_text_excerpt: String,
}

/// Normalizes a free-text claim description.
///
/// Loss type, severity and asset are each decided independently by the first
/// phrase group that hits. Amounts come from [`extract_amounts`]. Any input,
/// including the empty string, yields a fully populated result.
pub fn normalize_claim_text(text: &str) -> NormalizedClaim {
    let lowered = text.to_lowercase();

    let loss_type = LossType::detect(&lowered);
    let severity = Severity::detect(&lowered);
    let affected_asset = AffectedAsset::detect(&lowered);
    let amounts = extract_amounts(text);

    debug!(
        loss_type = loss_type.label(),
        severity = severity.label(),
        affected_asset = affected_asset.label(),
        claimed = ?amounts.claimed,
        estimated = ?amounts.estimated,
        "Claim normalized"
    );

    NormalizedClaim {
        loss_type,
        severity,
        affected_asset,
        claimed_amount: amounts.claimed,
        estimated_repair_amount: amounts.estimated,
        raw_text_excerpt: excerpt(text, EXCERPT_CHARS),
    }
}
