//! Transport boundary response contract.
//!
//! The web layer that fronts this crate returns a single JSON body for a
//! comparison request. The shape lives here so the library and any embedding
//! server agree on it, but nothing in the core depends on HTTP.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::MarkupDocument;

/// JSON body returned for a comparison request.
///
/// Exactly one of the two shapes is populated: on success `file1_name`,
/// `file2_name`, and `diff_html`; on failure `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file2_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompareResponse {
    /// The success shape: both file names and the rendered diff.
    pub fn success(
        file1_name: impl Into<String>,
        file2_name: impl Into<String>,
        diff: MarkupDocument,
    ) -> Self {
        Self {
            success: true,
            file1_name: Some(file1_name.into()),
            file2_name: Some(file2_name.into()),
            diff_html: Some(diff.into_string()),
            error: None,
        }
    }

    /// The failure shape: a user-facing message, nothing else.
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}
