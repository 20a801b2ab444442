//! Monetary amount extraction
//!
//! Amounts are recovered with a deliberately simple heuristic: every
//! standalone number of three or more digits is a candidate, the largest is
//! taken as the claimed amount and the runner-up as the repair estimate.
//!
//! Known limitation: nothing ties a number to its meaning. A policy number or
//! a year in the text competes with the real amounts and can win.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3,}\b").expect("amount pattern is valid"));

/// Amounts recovered from claim text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAmounts {
    /// Largest amount found
    pub claimed: Option<i64>,
    /// Second largest amount found
    pub estimated: Option<i64>,
}

/// Extracts claimed and estimated amounts from raw text.
///
/// Thousands separators are removed first, so `"85,000"` reads as `85000`.
/// Runs that do not fit in an `i64` are ignored.
pub fn extract_amounts(text: &str) -> ExtractedAmounts {
    let cleaned = text.replace(',', "");

    let mut numbers: Vec<i64> = AMOUNT_PATTERN
        .find_iter(&cleaned)
        .filter_map(|m| m.as_str().parse::<i64>().ok())
        .collect();
    numbers.sort_unstable_by(|a, b| b.cmp(a));

    ExtractedAmounts {
        claimed: numbers.first().copied(),
        estimated: numbers.get(1).copied(),
    }
}
