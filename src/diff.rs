//! Two-phase diff engine over canonical text.
//!
//! Phase 1 ([`crate::myers`]) computes a shortest edit script at character
//! granularity. Phase 2 ([`crate::cleanup`]) coarsens that script so a
//! human sees one replacement instead of a scatter of tiny fragments.
//!
//! Guarantees on the output of [`diff`]:
//!
//! - operations appear in left-to-right document order
//! - no operation is empty and no two adjacent operations share a tag
//! - concatenating the `Equal` + `Delete` spans reconstructs the left
//!   input; `Equal` + `Insert` spans reconstruct the right input
//! - same inputs always produce the same script
//!
//! Diffing never fails; input size limits are the pipeline's concern.

use crate::cleanup;
use crate::myers;
use crate::normalize::CanonicalText;
use crate::op::EditOp;

/// Compute a cleaned-up edit script between two canonical texts.
pub fn diff(a: &CanonicalText, b: &CanonicalText) -> Vec<EditOp> {
    let mut ops = myers::edit_script(a.as_str(), b.as_str());
    cleanup::merge_ops(&mut ops);
    cleanup::semantic_cleanup(&mut ops);
    ops
}
