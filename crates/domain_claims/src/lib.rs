//! Claims Normalization Domain
//!
//! This crate turns a free-text claim description into structured claim
//! attributes: what happened, how bad it is, what was damaged, and how much
//! money is involved.
//!
//! # Normalization
//!
//! ```text
//! text -> lowercase -> first-match phrase tables -> loss type / severity / asset
//! text -> strip commas -> 3+ digit runs -> claimed / estimated amounts
//! ```

pub mod claim;
pub mod amounts;
pub mod normalizer;

pub use claim::{LossType, Severity, AffectedAsset};
pub use amounts::{extract_amounts, ExtractedAmounts};
pub use normalizer::{normalize_claim_text, NormalizedClaim, EXCERPT_CHARS};
