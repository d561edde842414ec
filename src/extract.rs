//! Text extraction collaborator seam.
//!
//! Parsing PDF and DOCX files is not this crate's job. The pipeline only
//! needs *some* source of raw text, so the extractor is a trait the
//! embedding application implements (and tests stub out). Whatever text an
//! extractor returns is treated as opaque input regardless of quality.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => f.write_str("pdf"),
            DocumentKind::Docx => f.write_str("docx"),
        }
    }
}

/// Failure of the extraction collaborator on a malformed or unreadable
/// document. Propagated to the transport boundary unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to extract text from {kind} document: {reason}")]
pub struct ExtractionError {
    pub kind: DocumentKind,
    pub reason: String,
}

impl ExtractionError {
    pub fn new(kind: DocumentKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Turns document bytes into raw text.
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError>;
}
