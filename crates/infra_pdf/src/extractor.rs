//! Per-page PDF text extraction

use lopdf::Document;
use tracing::{debug, info};

use crate::error::PdfError;

/// Text pulled out of a PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Page texts joined with `\n`
    pub text: String,
    /// Number of pages in the document
    pub page_count: usize,
    /// Number of pages that contributed text
    pub pages_extracted: usize,
}

impl ExtractedDocument {
    /// True when no page produced any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Loads a PDF from memory and extracts the text of every page.
///
/// # Errors
///
/// Returns [`PdfError::Parse`] if the bytes are not a readable PDF. Failures
/// on individual pages are not errors; those pages are skipped.
pub fn extract_document(bytes: &[u8]) -> Result<ExtractedDocument, PdfError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();
    let page_count = pages.len();

    let mut page_texts = Vec::with_capacity(page_count);
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(text) if !text.is_empty() => page_texts.push(text),
            Ok(_) => debug!(page = page_number, "Page has no text"),
            Err(e) => debug!(page = page_number, error = %e, "Skipping unreadable page"),
        }
    }

    let pages_extracted = page_texts.len();
    info!(page_count, pages_extracted, "PDF text extracted");

    Ok(ExtractedDocument {
        text: page_texts.join("\n"),
        page_count,
        pages_extracted,
    })
}

/// Extracts the text of a PDF, pages joined with `\n`.
///
/// The result may be empty; see [`extract_document`] for error behaviour.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, PdfError> {
    extract_document(bytes).map(|document| document.text)
}
