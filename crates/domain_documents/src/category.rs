//! Document categories and their keyword tables

use serde::{Deserialize, Serialize};

/// Type of document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// First notice / claim submission form
    ClaimForm,
    /// Assessor or surveyor inspection report
    InspectionReport,
    /// Invoice or bill
    Invoice,
    /// Garage or workshop repair estimate
    RepairEstimate,
    /// Keyword-less row; with no keywords it never takes the lead
    Other,
}

impl DocumentType {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::ClaimForm => "Claim Form",
            DocumentType::InspectionReport => "Inspection Report",
            DocumentType::Invoice => "Invoice",
            DocumentType::RepairEstimate => "Repair Estimate",
            DocumentType::Other => "Other / Unclassified",
        }
    }

    /// Returns the snake_case tag used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentType::ClaimForm => "claim_form",
            DocumentType::InspectionReport => "inspection_report",
            DocumentType::Invoice => "invoice",
            DocumentType::RepairEstimate => "repair_estimate",
            DocumentType::Other => "other",
        }
    }
}

/// One row of the category table
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub doc_type: DocumentType,
    pub keywords: &'static [&'static str],
}

/// Category table in scoring order.
///
/// Order is significant: on equal scores the earlier row wins.
pub const CATEGORIES: &[Category] = &[
    Category {
        doc_type: DocumentType::ClaimForm,
        keywords: &[
            "claim form",
            "policy no",
            "policy number",
            "insured name",
            "date of loss",
            "type of loss",
            "claimant",
            "claim number",
        ],
    },
    Category {
        doc_type: DocumentType::InspectionReport,
        keywords: &[
            "inspection report",
            "assessor",
            "surveyor",
            "site visit",
            "inspection date",
            "observations",
            "damage assessment",
        ],
    },
    Category {
        doc_type: DocumentType::Invoice,
        keywords: &[
            "invoice",
            "tax invoice",
            "amount due",
            "bill to",
            "gst",
            "total amount",
            "invoice no",
            "invoice number",
        ],
    },
    Category {
        doc_type: DocumentType::RepairEstimate,
        keywords: &[
            "estimate",
            "repair estimate",
            "parts",
            "labour",
            "labor",
            "garage",
            "workshop",
            "job card",
        ],
    },
    Category {
        doc_type: DocumentType::Other,
        keywords: &[],
    },
];

/// Largest keyword list among categories that have keywords
pub fn max_keyword_count() -> usize {
    CATEGORIES
        .iter()
        .map(|category| category.keywords.len())
        .filter(|len| *len > 0)
        .max()
        .unwrap_or(0)
}
