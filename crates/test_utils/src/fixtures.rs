//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim texts and PDF documents. Texts are written so
//! that the phrases each analyzer looks for are known in advance.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Fixture for claim description texts
pub struct SampleTexts;

impl SampleTexts {
    /// A claim form with several claim_form keywords and all quality fields
    pub fn claim_form() -> &'static str {
        "CLAIM FORM\n\
         Policy Number: MTR-2291\n\
         Insured Name: R. Sharma\n\
         Date of Loss: 12/03/2024\n\
         Type of Loss: Accident\n\
         Claimant signature: signed"
    }

    /// A surveyor's inspection report
    pub fn inspection_report() -> &'static str {
        "Inspection Report prepared by the surveyor after a site visit.\n\
         Observations: rear panel damage consistent with impact."
    }

    /// A motor accident description with two amounts
    pub fn motor_accident() -> &'static str {
        "My car met with a collision near the highway. Front bumper broken. \
         Claim amount 65,000, garage estimate 42,000."
    }

    /// A description that triggers every red flag
    pub fn suspicious_claim() -> &'static str {
        "This is the third time my car got damaged. Old damage was already there \
         but please give urgent approval. There is no police report."
    }

    /// A garage repair estimate
    pub fn repair_estimate() -> &'static str {
        "Repair Estimate from City Workshop. Parts: 12,000. Labour: 4,500. Job card 7781."
    }
}

/// Builds a PDF with one page per entry of `pages`, each page showing its
/// text as a single line.
pub fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("pdf saves to memory");
    bytes
}

/// Bytes that are not a PDF at all
pub fn not_a_pdf() -> Vec<u8> {
    b"this is plain text pretending to be a pdf".to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_pdf_page_count() {
        let bytes = sample_pdf(&["one", "two", "three"]);
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_sample_pdf_has_header() {
        assert!(sample_pdf(&["x"]).starts_with(b"%PDF-1.5"));
    }
}
