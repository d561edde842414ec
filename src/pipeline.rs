//! Comparison pipeline orchestration.
//!
//! `compare` is a pure composition: normalize both inputs, enforce the size
//! guard, diff, render. All state is local to one invocation, so concurrent
//! calls need no coordination, and a caller-level timeout around the whole
//! call is safe because there are no external side effects to unwind.

use std::time::Instant;

use tracing::{info, warn, Level};

use crate::config::CompareConfig;
use crate::diff::diff;
use crate::error::CompareError;
use crate::extract::{DocumentKind, TextExtractor};
use crate::normalize::{normalize, CanonicalText};
use crate::render::{render, MarkupDocument};

/// Compare two raw text extractions and render the differences as HTML.
///
/// Empty inputs are valid: the result is an all-insert, all-delete, or
/// empty document as appropriate. The only failure mode is a canonical
/// text exceeding `cfg.max_input_chars`.
pub fn compare(
    raw_a: &str,
    raw_b: &str,
    cfg: &CompareConfig,
) -> Result<MarkupDocument, CompareError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "pipeline.compare",
        raw_a_len = raw_a.len(),
        raw_b_len = raw_b.len()
    );
    let _guard = span.enter();

    let canonical_a = normalize(raw_a);
    let canonical_b = normalize(raw_b);
    check_size(&canonical_a, cfg)?;
    check_size(&canonical_b, cfg)?;

    let ops = diff(&canonical_a, &canonical_b);
    let markup = render(&ops);
    info!(
        ops = ops.len(),
        markup_len = markup.as_str().len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "compare_done"
    );
    Ok(markup)
}

/// Extract text from two documents, then [`compare`] them.
///
/// Extraction failures propagate unchanged; the core never catches or
/// rewrites a collaborator's error.
pub fn compare_documents<E>(
    extractor: &E,
    bytes_a: &[u8],
    kind_a: DocumentKind,
    bytes_b: &[u8],
    kind_b: DocumentKind,
    cfg: &CompareConfig,
) -> Result<MarkupDocument, CompareError>
where
    E: TextExtractor + ?Sized,
{
    let raw_a = extractor.extract_text(bytes_a, kind_a)?;
    let raw_b = extractor.extract_text(bytes_b, kind_b)?;
    compare(&raw_a, &raw_b, cfg)
}

fn check_size(text: &CanonicalText, cfg: &CompareConfig) -> Result<(), CompareError> {
    if let Some(limit) = cfg.max_input_chars {
        let chars = text.char_count();
        if chars > limit {
            warn!(chars, limit, "compare_rejected");
            return Err(CompareError::InputTooLarge { chars, limit });
        }
    }
    Ok(())
}
