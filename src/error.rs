//! Error types produced by the comparison pipeline.
//!
//! The error surface is deliberately tiny. Normalization, diffing, and
//! rendering are total functions over arbitrary finite text, so the only
//! failures a comparison can produce are a collaborator failing to extract
//! text and an input exceeding the configured size guard. Errors are typed,
//! cloneable, and comparable so callers can map them to status codes and
//! assert on them in tests; none are ever downgraded to a partial result.

use thiserror::Error;

use crate::extract::ExtractionError;

/// Errors that can occur while comparing two documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    /// A canonical text exceeded the configured size threshold. Raised
    /// before the edit-script algorithm runs; oversized inputs are
    /// rejected, never truncated.
    #[error("canonical text of {chars} characters exceeds the limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    /// The extraction collaborator failed. Propagated unchanged.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
