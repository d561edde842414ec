//! Edit script coarsening.
//!
//! The raw script out of [`crate::myers`] is minimal but not readable: it
//! fragments on insignificant common substrings (a shared space or
//! punctuation mark between two large differing regions) and may contain
//! adjacent operations with the same tag. Two passes fix that:
//!
//! - [`merge_ops`] merges same-tag neighbours, factors common affixes out
//!   of paired delete/insert runs, and slides lone edits over flanking
//!   equalities where that removes a fragment.
//! - [`semantic_cleanup`] folds short equalities sandwiched between edits
//!   of comparable combined size back into the surrounding edit, then
//!   surfaces overlaps between a deletion and the following insertion as
//!   equalities.
//!
//! Both passes change segmentation only, never content: reconstruction of
//! either input from the script is preserved exactly.

use crate::myers::{common_prefix, common_suffix, to_string};
use crate::op::{EditOp, OpKind};

/// Merge adjacent same-tag operations and eliminate removable equalities.
///
/// On return no operation is empty and no two adjacent operations share a
/// tag; within any delete/insert pair the deletion comes first.
pub(crate) fn merge_ops(ops: &mut Vec<EditOp>) {
    // Sentinel equality so the final run of edits gets flushed by the loop.
    ops.push(EditOp::Equal(String::new()));

    let mut pointer = 0usize;
    let mut del_count = 0usize;
    let mut ins_count = 0usize;
    let mut del_text = String::new();
    let mut ins_text = String::new();

    while pointer < ops.len() {
        if pointer < ops.len() - 1 && ops[pointer].is_empty() {
            ops.remove(pointer);
            continue;
        }
        match ops[pointer].kind() {
            OpKind::Insert => {
                ins_count += 1;
                ins_text.push_str(ops[pointer].text());
                pointer += 1;
            }
            OpKind::Delete => {
                del_count += 1;
                del_text.push_str(ops[pointer].text());
                pointer += 1;
            }
            OpKind::Equal => {
                if !del_text.is_empty() || !ins_text.is_empty() {
                    if !del_text.is_empty() && !ins_text.is_empty() {
                        // Text common to both sides of a replacement belongs
                        // in the neighbouring equalities, not the edit.
                        let mut del_chars: Vec<char> = del_text.chars().collect();
                        let mut ins_chars: Vec<char> = ins_text.chars().collect();

                        let prefix = common_prefix(&ins_chars, &del_chars);
                        if prefix > 0 {
                            let common = to_string(&ins_chars[..prefix]);
                            let run_start = pointer - ins_count - del_count;
                            if run_start > 0 && ops[run_start - 1].kind() == OpKind::Equal {
                                ops[run_start - 1].text_mut().push_str(&common);
                            } else {
                                ops.insert(0, EditOp::Equal(common));
                                pointer += 1;
                            }
                            ins_chars.drain(..prefix);
                            del_chars.drain(..prefix);
                        }

                        let suffix = common_suffix(&ins_chars, &del_chars);
                        if suffix > 0 {
                            let common = to_string(&ins_chars[ins_chars.len() - suffix..]);
                            let current = ops[pointer].text_mut();
                            current.insert_str(0, &common);
                            ins_chars.truncate(ins_chars.len() - suffix);
                            del_chars.truncate(del_chars.len() - suffix);
                        }

                        del_text = to_string(&del_chars);
                        ins_text = to_string(&ins_chars);
                    }

                    // Replace the whole run with at most one deletion and
                    // one insertion.
                    let run_start = pointer - ins_count - del_count;
                    let mut merged: Vec<EditOp> = Vec::with_capacity(2);
                    if !del_text.is_empty() {
                        merged.push(EditOp::Delete(std::mem::take(&mut del_text)));
                    }
                    if !ins_text.is_empty() {
                        merged.push(EditOp::Insert(std::mem::take(&mut ins_text)));
                    }
                    let merged_len = merged.len();
                    ops.splice(run_start..pointer, merged);
                    pointer = run_start + merged_len;
                }

                if pointer != 0 && ops[pointer - 1].kind() == OpKind::Equal {
                    let text = std::mem::take(ops[pointer].text_mut());
                    ops[pointer - 1].text_mut().push_str(&text);
                    ops.remove(pointer);
                } else {
                    pointer += 1;
                }

                del_count = 0;
                ins_count = 0;
                del_text.clear();
                ins_text.clear();
            }
        }
    }

    if ops.last().is_some_and(|op| op.is_empty()) {
        ops.pop();
    }

    // Second pass: a single edit surrounded by equalities can sometimes be
    // shifted sideways to absorb one of them entirely.
    let mut changed = false;
    let mut pointer = 1usize;
    while pointer + 1 < ops.len() {
        if ops[pointer - 1].kind() != OpKind::Equal || ops[pointer + 1].kind() != OpKind::Equal {
            pointer += 1;
            continue;
        }
        let prev: Vec<char> = ops[pointer - 1].text().chars().collect();
        let cur: Vec<char> = ops[pointer].text().chars().collect();
        let next: Vec<char> = ops[pointer + 1].text().chars().collect();

        if cur.len() >= prev.len() && cur[cur.len() - prev.len()..] == prev[..] {
            // Shift the edit left over the previous equality.
            let kind = ops[pointer].kind();
            let shifted = to_string(&prev) + &to_string(&cur[..cur.len() - prev.len()]);
            ops[pointer] = EditOp::new(kind, shifted);
            *ops[pointer + 1].text_mut() = to_string(&prev) + &to_string(&next);
            ops.remove(pointer - 1);
            changed = true;
            // The script shrank; re-check from the same position.
        } else if cur.len() >= next.len() && cur[..next.len()] == next[..] {
            // Shift the edit right over the next equality.
            let kind = ops[pointer].kind();
            ops[pointer - 1].text_mut().push_str(&to_string(&next));
            let shifted = to_string(&cur[next.len()..]) + &to_string(&next);
            ops[pointer] = EditOp::new(kind, shifted);
            ops.remove(pointer + 1);
            changed = true;
            pointer += 1;
        } else {
            pointer += 1;
        }
    }

    // Shifts can expose further mergeable runs.
    if changed {
        merge_ops(ops);
    }
}

/// Coarsen a merged script for human readability.
///
/// An equality no longer than the edits on both of its sides is noise: it
/// splits one conceptual replacement into several visually distracting
/// fragments. Such equalities are folded back into the surrounding edit.
/// Afterwards, overlaps between each deletion and the insertion that
/// follows it are factored out as equalities. The exact thresholds are an
/// implementation choice pinned by the tests in this module.
pub(crate) fn semantic_cleanup(ops: &mut Vec<EditOp>) {
    let mut changed = false;
    // Indices of equality candidates still eligible for elimination.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    // Edited character counts before and after the candidate equality.
    let mut ins_before = 0usize;
    let mut del_before = 0usize;
    let mut ins_after = 0usize;
    let mut del_after = 0usize;

    let mut pointer: isize = 0;
    while (pointer as usize) < ops.len() {
        let idx = pointer as usize;
        match ops[idx].kind() {
            OpKind::Equal => {
                equalities.push(idx);
                ins_before = ins_after;
                del_before = del_after;
                ins_after = 0;
                del_after = 0;
                last_equality = Some(ops[idx].text().to_string());
            }
            kind => {
                let len = ops[idx].text().chars().count();
                if kind == OpKind::Insert {
                    ins_after += len;
                } else {
                    del_after += len;
                }
                let eliminate = last_equality.as_ref().is_some_and(|eq| {
                    let eq_len = eq.chars().count();
                    eq_len <= ins_before.max(del_before) && eq_len <= ins_after.max(del_after)
                });
                if eliminate {
                    let eq_text = last_equality.take().expect("checked above");
                    let eq_idx = *equalities.last().expect("candidate recorded");
                    // Duplicate the equality into both sides of the edit.
                    ops[eq_idx] = EditOp::Delete(eq_text.clone());
                    ops.insert(eq_idx + 1, EditOp::Insert(eq_text));
                    equalities.pop();
                    // The equality before that one may have become
                    // eliminable too; rewind and rescan.
                    equalities.pop();
                    pointer = equalities.last().map_or(-1, |&p| p as isize);
                    ins_before = 0;
                    del_before = 0;
                    ins_after = 0;
                    del_after = 0;
                    changed = true;
                }
            }
        }
        pointer += 1;
    }

    if changed {
        merge_ops(ops);
    }

    factor_overlaps(ops);
}

/// Surface overlaps between adjacent delete/insert pairs as equalities.
///
/// `diff("abcxxx", "xxxdef")` ends up as one deletion and one insertion even
/// though `xxx` survived; when the overlap covers at least half of either
/// edit it is worth reporting as unchanged text.
fn factor_overlaps(ops: &mut Vec<EditOp>) {
    let mut pointer = 1usize;
    while pointer < ops.len() {
        if ops[pointer - 1].kind() == OpKind::Delete && ops[pointer].kind() == OpKind::Insert {
            let deletion: Vec<char> = ops[pointer - 1].text().chars().collect();
            let insertion: Vec<char> = ops[pointer].text().chars().collect();
            let overlap_fwd = overlap_len(&deletion, &insertion);
            let overlap_rev = overlap_len(&insertion, &deletion);
            if overlap_fwd >= overlap_rev {
                if 2 * overlap_fwd >= deletion.len() || 2 * overlap_fwd >= insertion.len() {
                    let equal = to_string(&insertion[..overlap_fwd]);
                    ops[pointer - 1] =
                        EditOp::Delete(to_string(&deletion[..deletion.len() - overlap_fwd]));
                    ops[pointer] = EditOp::Insert(to_string(&insertion[overlap_fwd..]));
                    ops.insert(pointer, EditOp::Equal(equal));
                    pointer += 1;
                }
            } else if 2 * overlap_rev >= deletion.len() || 2 * overlap_rev >= insertion.len() {
                // Reverse overlap: the insertion ends where the deletion
                // starts. Swap the edit order around the equality.
                let equal = to_string(&deletion[..overlap_rev]);
                ops[pointer - 1] =
                    EditOp::Insert(to_string(&insertion[..insertion.len() - overlap_rev]));
                ops[pointer] = EditOp::Delete(to_string(&deletion[overlap_rev..]));
                ops.insert(pointer, EditOp::Equal(equal));
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Length of the longest suffix of `a` that is a prefix of `b`.
fn overlap_len(a: &[char], b: &[char]) -> usize {
    let max = a.len().min(b.len());
    (1..=max)
        .rev()
        .find(|&n| a[a.len() - n..] == b[..n])
        .unwrap_or(0)
}
