//! Infrastructure PDF Layer
//!
//! This crate turns uploaded files into the plain text the analyzers consume.
//! It is deliberately shallow: no OCR, no layout or table reconstruction,
//! only the text operators of each page in page order.
//!
//! # Extraction
//!
//! - Pages are read in ascending page-number order
//! - A page that fails to extract, or yields no text, is skipped
//! - Page texts are joined with a newline
//!
//! Whether an empty result is acceptable is the caller's decision.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_pdf::{ensure_pdf_filename, extract_text_from_pdf};
//!
//! ensure_pdf_filename("estimate.pdf")?;
//! let text = extract_text_from_pdf(&bytes)?;
//! ```

pub mod error;
pub mod extractor;
pub mod upload;

pub use error::PdfError;
pub use extractor::{extract_document, extract_text_from_pdf, ExtractedDocument};
pub use upload::ensure_pdf_filename;
