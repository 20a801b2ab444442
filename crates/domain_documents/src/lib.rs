//! Document Classification Domain
//!
//! Maps the text of an uploaded document to one of a closed set of document
//! categories. Classification is keyword driven and fully explainable: the
//! result names the phrases that decided it and flags fields a reviewer
//! would expect but could not find.
//!
//! # Categories
//!
//! ```text
//! claim_form -> inspection_report -> invoice -> repair_estimate -> other
//! ```
//!
//! Categories are scored in that order and the first maximum wins.

pub mod category;
pub mod classifier;
pub mod quality;

pub use category::{DocumentType, CATEGORIES};
pub use classifier::{classify_document, ClassificationResult};
pub use quality::{quality_flags, QualityCheck};
