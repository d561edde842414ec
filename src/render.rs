//! Edit script rendering.
//!
//! Serializes an edit script into an HTML fragment: equal spans become
//! escaped literal text, insertions and deletions are wrapped in
//! CSS-classable `<span>` elements. Escaping happens here and only here so
//! the diff engine stays testable on plain text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::op::EditOp;

/// The annotation class for inserted text.
pub const INSERT_CLASS: &str = "diff-insert";
/// The annotation class for deleted text.
pub const DELETE_CLASS: &str = "diff-delete";

/// The rendered comparison result: an HTML fragment safe to embed as-is.
///
/// Terminal output artifact. All literal content has been escaped; the only
/// markup present are the insertion/deletion wrapper spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkupDocument(String);

impl MarkupDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MarkupDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MarkupDocument> for String {
    fn from(doc: MarkupDocument) -> Self {
        doc.0
    }
}

/// Render an edit script as annotated HTML. Total and deterministic.
///
/// Whitespace-only insertions and deletions are suppressed entirely: they
/// are normalization residue, not genuine content differences, and would
/// otherwise render as invisible highlighted boxes.
pub fn render(ops: &[EditOp]) -> MarkupDocument {
    let mut html = String::new();
    for op in ops {
        match op {
            EditOp::Equal(text) => html.push_str(&escape_html(text)),
            EditOp::Insert(text) => push_annotated(&mut html, text, INSERT_CLASS),
            EditOp::Delete(text) => push_annotated(&mut html, text, DELETE_CLASS),
        }
    }
    MarkupDocument(html)
}

fn push_annotated(out: &mut String, text: &str, class: &str) {
    if text.trim().is_empty() {
        return;
    }
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Escape HTML special characters.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_spans_are_literal() {
        let ops = vec![EditOp::Equal("Hello World".into())];
        assert_eq!(render(&ops).as_str(), "Hello World");
    }

    #[test]
    fn insert_and_delete_are_annotated() {
        let ops = vec![
            EditOp::Equal("The ".into()),
            EditOp::Delete("cat".into()),
            EditOp::Insert("dog".into()),
            EditOp::Equal(" sat.".into()),
        ];
        assert_eq!(
            render(&ops).as_str(),
            "The <span class=\"diff-delete\">cat</span>\
             <span class=\"diff-insert\">dog</span> sat."
        );
    }

    #[test]
    fn whitespace_only_edits_are_suppressed() {
        let ops = vec![
            EditOp::Equal("a".into()),
            EditOp::Insert("  \n ".into()),
            EditOp::Delete("\t".into()),
            EditOp::Equal("b".into()),
        ];
        assert_eq!(render(&ops).as_str(), "ab");
    }

    #[test]
    fn literal_text_is_escaped() {
        let ops = vec![EditOp::Equal("a < b & \"c\" > d".into())];
        assert_eq!(
            render(&ops).as_str(),
            "a &lt; b &amp; &quot;c&quot; &gt; d"
        );
    }

    #[test]
    fn annotated_text_is_escaped_too() {
        let ops = vec![EditOp::Insert("<script>".into())];
        assert_eq!(
            render(&ops).as_str(),
            "<span class=\"diff-insert\">&lt;script&gt;</span>"
        );
    }

    #[test]
    fn empty_script_renders_empty_document() {
        assert!(render(&[]).is_empty());
    }
}
