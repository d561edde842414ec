//! markdiff — document comparison core.
//!
//! Takes two raw text extractions, canonicalizes away the whitespace and
//! artifact noise that would otherwise swamp a diff with false positives,
//! computes a minimal character-level edit script between the canonical
//! forms, and renders that script as an HTML fragment annotated with
//! insertions and deletions.
//!
//! ## Stages
//!
//! - [`normalize`] — raw text to a comparison-stable [`CanonicalText`]
//! - [`diff`] — Myers edit script plus semantic cleanup, as [`EditOp`]s
//! - [`render`] — escaped HTML with `diff-insert` / `diff-delete` spans
//! - [`compare`] — the three composed, behind a configurable size guard
//!
//! ## Pure function guarantee
//!
//! No I/O, no clocks, no shared state. The pipeline is a synchronous
//! computation over in-memory strings; concurrent invocations need no
//! coordination. Same inputs, same output, on any machine.
//!
//! ## What this crate is not
//!
//! Document parsing and HTTP plumbing live in the embedding application.
//! The extraction side is only a trait seam ([`TextExtractor`]) and the
//! transport side only a response shape ([`CompareResponse`]).
//!
//! ## Example
//!
//! ```
//! use markdiff::{compare, CompareConfig};
//!
//! let markup = compare(
//!     "The cat sat.\n\n\n",
//!     "The dog sat.",
//!     &CompareConfig::default(),
//! )
//! .expect("inputs are small");
//!
//! assert_eq!(
//!     markup.as_str(),
//!     "The <span class=\"diff-delete\">cat</span>\
//!      <span class=\"diff-insert\">dog</span> sat."
//! );
//! ```

mod cleanup;
mod config;
mod diff;
mod error;
mod extract;
mod myers;
mod normalize;
mod op;
mod pipeline;
mod render;
mod response;

pub use crate::config::{CompareConfig, DEFAULT_MAX_INPUT_CHARS};
pub use crate::diff::diff;
pub use crate::error::CompareError;
pub use crate::extract::{DocumentKind, ExtractionError, TextExtractor};
pub use crate::normalize::{normalize, CanonicalText};
pub use crate::op::{source_text, target_text, EditOp, OpKind};
pub use crate::pipeline::{compare, compare_documents};
pub use crate::render::{render, MarkupDocument, DELETE_CLASS, INSERT_CLASS};
pub use crate::response::CompareResponse;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_compose_like_the_pipeline() {
        let a = normalize("Left  text\r\nwith noise\u{00AD}");
        let b = normalize("Left text\nwith noise added");
        let ops = diff(&a, &b);
        let by_hand = render(&ops);
        let end_to_end = compare(
            "Left  text\r\nwith noise\u{00AD}",
            "Left text\nwith noise added",
            &CompareConfig::default(),
        )
        .expect("small inputs");
        assert_eq!(by_hand, end_to_end);
    }

    #[test]
    fn whitespace_variants_never_reach_the_diff() {
        let plain = "two words\nsecond line";
        let noisy = "two\u{2009}words\r\nsecond\u{00A0}line\n\n";
        let ops = diff(&normalize(plain), &normalize(noisy));
        assert_eq!(ops, vec![EditOp::Equal("two words\nsecond line".into())]);
    }

    #[test]
    fn reconstruction_survives_the_whole_stack() {
        let a = normalize("shared start, removed middle, shared end");
        let b = normalize("shared start, inserted middle!, shared end");
        let ops = diff(&a, &b);
        assert_eq!(source_text(&ops), a.as_str());
        assert_eq!(target_text(&ops), b.as_str());
    }
}
