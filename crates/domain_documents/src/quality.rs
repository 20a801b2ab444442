//! Document quality checks
//!
//! Each check looks for evidence of a field reviewers expect on claim
//! paperwork. A check that finds none of its markers raises a flag.

use core_kernel::contains_any;

/// A presence check over lowercased document text
#[derive(Debug, Clone, Copy)]
pub struct QualityCheck {
    /// Markers, any one of which satisfies the check
    pub markers: &'static [&'static str],
    /// Flag raised when no marker is present
    pub flag: &'static str,
}

/// Checks in reporting order
pub const QUALITY_CHECKS: &[QualityCheck] = &[
    QualityCheck {
        markers: &["signature", "signed"],
        flag: "No signature-related text detected (e.g., 'Signature', 'Signed').",
    },
    QualityCheck {
        markers: &["date", "dd/mm", "mm/dd"],
        flag: "No clear date field detected.",
    },
    QualityCheck {
        markers: &["policy", "policy no"],
        flag: "No policy identifier field detected.",
    },
];

/// Runs every quality check and returns the flags that fired
pub fn quality_flags(lowered: &str) -> Vec<String> {
    QUALITY_CHECKS
        .iter()
        .filter(|check| !contains_any(lowered, check.markers))
        .map(|check| check.flag.to_string())
        .collect()
}
