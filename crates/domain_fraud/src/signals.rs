//! Fraud signals: red-flag phrase groups and the amount ratio check

/// A red-flag phrase group
#[derive(Debug, Clone, Copy)]
pub struct RedFlag {
    /// Short signal name for logs
    pub name: &'static str,
    /// Lowercase trigger phrases
    pub phrases: &'static [&'static str],
    /// Score added when any phrase matches
    pub weight: u32,
    /// Explanation appended when the flag fires
    pub reason: &'static str,
}

/// Red flags in check order
pub const RED_FLAGS: &[RedFlag] = &[
    RedFlag {
        name: "repeated_claims",
        phrases: &[
            "previous claim",
            "multiple claims",
            "again damaged",
            "third time",
            "second time",
            "repeated damage",
        ],
        weight: 2,
        reason: "History of previous or repeated claims mentioned.",
    },
    RedFlag {
        name: "pre_existing_damage",
        phrases: &["backdated", "pre-existing", "old damage", "existing damage"],
        weight: 2,
        reason: "Possible pre-existing or backdated damage indicators.",
    },
    RedFlag {
        name: "urgency_pressure",
        phrases: &["urgent approval", "process fast", "asap", "immediately without checks"],
        weight: 1,
        reason: "High urgency / pressure to approve quickly.",
    },
    RedFlag {
        name: "missing_external_report",
        phrases: &["no police report", "refused to file", "no fir", "no proof"],
        weight: 2,
        reason: "No police / external report despite loss context.",
    },
];

/// Outcome of comparing the claimed amount with the repair estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountCheck {
    /// Claimed exceeds 1.5x the estimate
    SignificantlyHigher { claimed: i64, estimated: i64 },
    /// Claimed exceeds 1.2x the estimate
    ModeratelyHigher { claimed: i64, estimated: i64 },
    /// Within tolerance
    Consistent,
    /// One or both amounts missing
    Skipped,
}

impl AmountCheck {
    /// Compares the two amounts.
    ///
    /// Ratios are evaluated in integer arithmetic: `c > 1.5e` as `2c > 3e`
    /// and `c > 1.2e` as `5c > 6e`.
    pub fn evaluate(claimed: Option<i64>, estimated: Option<i64>) -> Self {
        let (Some(claimed), Some(estimated)) = (claimed, estimated) else {
            return AmountCheck::Skipped;
        };
        let (c, e) = (claimed as i128, estimated as i128);

        if 2 * c > 3 * e {
            AmountCheck::SignificantlyHigher { claimed, estimated }
        } else if 5 * c > 6 * e {
            AmountCheck::ModeratelyHigher { claimed, estimated }
        } else {
            AmountCheck::Consistent
        }
    }

    /// Score contributed by this outcome
    pub fn weight(&self) -> u32 {
        match self {
            AmountCheck::SignificantlyHigher { .. } => 2,
            AmountCheck::ModeratelyHigher { .. } => 1,
            AmountCheck::Consistent | AmountCheck::Skipped => 0,
        }
    }

    /// Explanation for outcomes that contribute to the score
    pub fn reason(&self) -> Option<String> {
        match self {
            AmountCheck::SignificantlyHigher { claimed, estimated } => Some(format!(
                "Claimed amount ({}) is significantly higher than estimated repair ({}).",
                claimed, estimated
            )),
            AmountCheck::ModeratelyHigher { claimed, estimated } => Some(format!(
                "Claimed amount ({}) is moderately higher than estimated repair ({}).",
                claimed, estimated
            )),
            AmountCheck::Consistent | AmountCheck::Skipped => None,
        }
    }
}
