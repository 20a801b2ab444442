//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim intelligence test suite.
//!
//! # Modules
//!
//! - `fixtures`: Sample claim texts and generated PDF documents
//! - `assertions`: Assertion helpers for excerpts and rendered images
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
