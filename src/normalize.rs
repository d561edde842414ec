//! Raw text canonicalization.
//!
//! Extraction libraries emit inconsistent whitespace glyphs, soft hyphens,
//! and control bytes for visually identical text. If those artifacts reach
//! the diff engine, the output drowns in false positives. [`normalize`]
//! collapses all of that noise into a single comparison-stable form.
//!
//! The transformation is lossy on purpose: original whitespace layout is
//! discarded because the comparison cares about content, not formatting.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// The comparison-stable form of an extracted document.
///
/// Invariants held by construction:
///
/// - non-empty lines joined by a single `\n`, no trailing newline
/// - no leading or trailing whitespace on any line
/// - no control or invisible-format characters
/// - every whitespace variant collapsed to the ASCII space
///
/// An empty `CanonicalText` represents an empty sequence of lines and is a
/// valid comparison input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalText(String);

impl CanonicalText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in Unicode scalar values. This is the unit the input size
    /// guard is expressed in, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize raw extracted text. Total, deterministic, and idempotent.
///
/// The pass works in two stages. The first walks the input once, normalizing
/// every line terminator (LF, CR, CRLF) to `\n`, mapping every other
/// whitespace variant to the ASCII space, and dropping invisible format
/// characters (`Cf`: soft hyphens, zero-width joiners, BOM, ...) and control
/// characters (`Cc`). The second splits on `\n`, collapses whitespace runs
/// within each line to single spaces (which also trims the edges), discards
/// lines that became empty, and rejoins with single newlines.
pub fn normalize(raw: &str) -> CanonicalText {
    let mut flat = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // CRLF counts as one terminator.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flat.push('\n');
            }
            '\n' => flat.push('\n'),
            // Zs/Zl/Zp and the ASCII whitespace family all become one space.
            _ if ch.is_whitespace() || ch.is_separator() => flat.push(' '),
            // Invisible formatting and residual control bytes carry no
            // content and must not affect the comparison.
            _ if ch.is_other_format() || ch.is_other_control() => {}
            _ => flat.push(ch),
        }
    }

    let mut canonical = String::with_capacity(flat.len());
    for line in flat.split('\n') {
        let mut segments = line.split_whitespace();
        let Some(first) = segments.next() else {
            continue;
        };
        if !canonical.is_empty() {
            canonical.push('\n');
        }
        canonical.push_str(first);
        for segment in segments {
            canonical.push(' ');
            canonical.push_str(segment);
        }
    }
    CanonicalText(canonical)
}
