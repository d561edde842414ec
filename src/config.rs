//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on canonical text size, in Unicode scalar values.
///
/// The diff algorithm is quadratic in the worst case, so pathologically
/// large documents must be rejected upstream rather than allowed to degrade
/// service. A million characters comfortably covers any realistic document
/// while keeping the worst case bounded.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1_000_000;

/// Configuration for a comparison run.
///
/// Cheap to clone and serializable. There is deliberately no other
/// configuration surface: normalization, diffing, and rendering behavior is
/// fixed so that equal inputs always produce equal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Maximum size of either canonical text, in characters. Inputs above
    /// the limit are rejected before the diff runs; they are never
    /// truncated, since a truncated diff would be silently misleading.
    /// `None` disables the guard.
    pub max_input_chars: Option<usize>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_input_chars: Some(DEFAULT_MAX_INPUT_CHARS),
        }
    }
}
