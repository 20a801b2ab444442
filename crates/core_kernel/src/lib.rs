//! Core Kernel - Foundational types and utilities for claim intelligence
//!
//! This crate provides the building blocks shared by every analyzer:
//! - Analysis text with blank-input validation
//! - Ordered phrase tables and the substring scans run over them
//! - Strongly-typed identifiers for session bookkeeping

pub mod text;
pub mod identifiers;
pub mod error;

pub use text::{AnalysisText, PhraseGroup, contains_any, first_match, matched_phrases, excerpt};
pub use identifiers::SessionId;
pub use error::CoreError;
