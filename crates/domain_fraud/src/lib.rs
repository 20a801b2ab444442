//! Fraud Risk Domain
//!
//! Scores a claim description for fraud risk. The score is a sum of fixed
//! weights: one per red-flag phrase group found in the text, plus a penalty
//! when the claimed amount runs well above the repair estimate. The total
//! maps onto three risk levels.
//!
//! # Risk Levels
//!
//! ```text
//! score 0-1 -> Low, score 2-3 -> Medium, score 4+ -> High
//! ```

pub mod signals;
pub mod scorer;

pub use signals::{RedFlag, RED_FLAGS, AmountCheck};
pub use scorer::{score_fraud_risk, FraudAssessment, RiskLevel, MAX_SCORE};
