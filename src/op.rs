//! Edit script operations.

use serde::{Deserialize, Serialize};

/// The tag of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
}

/// One operation of an edit script over canonical text.
///
/// An ordered sequence of these reconstructs both inputs: concatenating the
/// spans tagged `Equal` and `Delete` yields the left-hand text, and the
/// spans tagged `Equal` and `Insert` yield the right-hand text. The variants
/// are explicit (rather than a loosely-typed pair) so those invariants can
/// be checked against the tag directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    /// Text present in both inputs.
    Equal(String),
    /// Text present only in the right-hand input.
    Insert(String),
    /// Text present only in the left-hand input.
    Delete(String),
}

impl EditOp {
    pub(crate) fn new(kind: OpKind, text: String) -> Self {
        match kind {
            OpKind::Equal => EditOp::Equal(text),
            OpKind::Insert => EditOp::Insert(text),
            OpKind::Delete => EditOp::Delete(text),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            EditOp::Equal(_) => OpKind::Equal,
            EditOp::Insert(_) => OpKind::Insert,
            EditOp::Delete(_) => OpKind::Delete,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal(text) | EditOp::Insert(text) | EditOp::Delete(text) => text,
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            EditOp::Equal(text) | EditOp::Insert(text) | EditOp::Delete(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Reconstruct the left-hand input from an edit script (`Equal` + `Delete`).
pub fn source_text(ops: &[EditOp]) -> String {
    let mut out = String::new();
    for op in ops {
        if op.kind() != OpKind::Insert {
            out.push_str(op.text());
        }
    }
    out
}

/// Reconstruct the right-hand input from an edit script (`Equal` + `Insert`).
pub fn target_text(ops: &[EditOp]) -> String {
    let mut out = String::new();
    for op in ops {
        if op.kind() != OpKind::Delete {
            out.push_str(op.text());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_respects_tags() {
        let ops = vec![
            EditOp::Equal("The ".into()),
            EditOp::Delete("cat".into()),
            EditOp::Insert("dog".into()),
            EditOp::Equal(" sat.".into()),
        ];
        assert_eq!(source_text(&ops), "The cat sat.");
        assert_eq!(target_text(&ops), "The dog sat.");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(EditOp::Equal("x".into()).kind(), OpKind::Equal);
        assert_eq!(EditOp::Insert("x".into()).kind(), OpKind::Insert);
        assert_eq!(EditOp::Delete("x".into()).kind(), OpKind::Delete);
    }
}
