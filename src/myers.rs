//! Minimal edit script computation.
//!
//! Myers' O(ND) difference algorithm in its divide-and-conquer ("bisect")
//! form: forward and reverse furthest-reaching paths are advanced in
//! lockstep until they overlap, the edit graph is split at the overlap
//! point, and both halves are solved recursively. Memory stays linear in
//! the input size regardless of edit distance.
//!
//! Operates at character (Unicode scalar value) granularity over the full
//! strings. The script returned here is raw: adjacent operations may share
//! a tag and equalities may be fragmented. The cleanup passes in
//! [`crate::cleanup`] take care of that.

use crate::op::EditOp;

/// Compute a raw shortest edit script transforming `a` into `b`.
pub(crate) fn edit_script(a: &str, b: &str) -> Vec<EditOp> {
    if a == b {
        return if a.is_empty() {
            Vec::new()
        } else {
            vec![EditOp::Equal(a.to_string())]
        };
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    diff_chars(&a_chars, &b_chars)
}

fn diff_chars(a: &[char], b: &[char]) -> Vec<EditOp> {
    if a == b {
        return if a.is_empty() {
            Vec::new()
        } else {
            vec![EditOp::Equal(to_string(a))]
        };
    }

    // Peel off the common affixes so the expensive part only sees the
    // differing core.
    let prefix = common_prefix(a, b);
    let (a_rest, b_rest) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a_rest, b_rest);
    let core_a = &a_rest[..a_rest.len() - suffix];
    let core_b = &b_rest[..b_rest.len() - suffix];

    let mut ops = Vec::new();
    if prefix > 0 {
        ops.push(EditOp::Equal(to_string(&a[..prefix])));
    }
    ops.extend(diff_core(core_a, core_b));
    if suffix > 0 {
        ops.push(EditOp::Equal(to_string(&a_rest[a_rest.len() - suffix..])));
    }
    ops
}

/// Diff two sequences known to share no common prefix or suffix.
fn diff_core(a: &[char], b: &[char]) -> Vec<EditOp> {
    if a.is_empty() {
        return if b.is_empty() {
            Vec::new()
        } else {
            vec![EditOp::Insert(to_string(b))]
        };
    }
    if b.is_empty() {
        return vec![EditOp::Delete(to_string(a))];
    }

    // Shortcut: the shorter text contained inside the longer one.
    let (long, short, long_is_left) = if a.len() > b.len() {
        (a, b, true)
    } else {
        (b, a, false)
    };
    if let Some(at) = find_subslice(long, short) {
        let head = to_string(&long[..at]);
        let tail = to_string(&long[at + short.len()..]);
        let surround = if long_is_left {
            EditOp::Delete
        } else {
            EditOp::Insert
        };
        let mut ops = Vec::with_capacity(3);
        if !head.is_empty() {
            ops.push(surround(head));
        }
        ops.push(EditOp::Equal(to_string(short)));
        if !tail.is_empty() {
            ops.push(surround(tail));
        }
        return ops;
    }

    // A single character that is not contained in the other text shares
    // nothing with it.
    if short.len() == 1 {
        return vec![EditOp::Delete(to_string(a)), EditOp::Insert(to_string(b))];
    }

    bisect(a, b)
}

/// Find the middle of the optimal path through the edit graph and recurse
/// on both halves.
fn bisect(a: &[char], b: &[char]) -> Vec<EditOp> {
    let n = a.len();
    let m = b.len();
    let max_d = (n + m).div_ceil(2) + 1;
    let v_offset = max_d;
    let v_len = 2 * max_d;

    // `forward[k]`/`reverse[k]` hold the furthest-reaching x on diagonal k;
    // -1 marks diagonals not yet visited.
    let mut forward: Vec<i64> = vec![-1; v_len];
    let mut reverse: Vec<i64> = vec![-1; v_len];
    forward[v_offset + 1] = 0;
    reverse[v_offset + 1] = 0;

    let delta = n as i64 - m as i64;
    // When the total edit distance is odd the paths can only overlap while
    // extending the forward search.
    let front = delta % 2 != 0;

    // Trim the k-range once a path walks off an edge of the graph.
    let mut k1_start = 0i64;
    let mut k1_end = 0i64;
    let mut k2_start = 0i64;
    let mut k2_end = 0i64;

    for d in 0..max_d as i64 {
        // Forward path.
        let mut k1 = -d + k1_start;
        while k1 <= d - k1_end {
            let k1_idx = (v_offset as i64 + k1) as usize;
            let mut x1: i64 = if k1 == -d || (k1 != d && forward[k1_idx - 1] < forward[k1_idx + 1])
            {
                forward[k1_idx + 1]
            } else {
                forward[k1_idx - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n as i64 && y1 < m as i64 && a[x1 as usize] == b[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            forward[k1_idx] = x1;
            if x1 > n as i64 {
                k1_end += 2;
            } else if y1 > m as i64 {
                k1_start += 2;
            } else if front {
                let k2_idx = (v_offset as i64 + delta - k1) as usize;
                if k2_idx < v_len && reverse[k2_idx] != -1 && x1 >= n as i64 - reverse[k2_idx] {
                    return split(a, b, x1 as usize, y1 as usize);
                }
            }
            k1 += 2;
        }

        // Reverse path.
        let mut k2 = -d + k2_start;
        while k2 <= d - k2_end {
            let k2_idx = (v_offset as i64 + k2) as usize;
            let mut x2: i64 = if k2 == -d || (k2 != d && reverse[k2_idx - 1] < reverse[k2_idx + 1])
            {
                reverse[k2_idx + 1]
            } else {
                reverse[k2_idx - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n as i64
                && y2 < m as i64
                && a[n - 1 - x2 as usize] == b[m - 1 - y2 as usize]
            {
                x2 += 1;
                y2 += 1;
            }
            reverse[k2_idx] = x2;
            if x2 > n as i64 {
                k2_end += 2;
            } else if y2 > m as i64 {
                k2_start += 2;
            } else if !front {
                let k1_idx = (v_offset as i64 + delta - k2) as usize;
                if k1_idx < v_len && forward[k1_idx] != -1 {
                    let x1 = forward[k1_idx];
                    let y1 = v_offset as i64 + x1 - k1_idx as i64;
                    if x1 >= n as i64 - x2 {
                        return split(a, b, x1 as usize, y1 as usize);
                    }
                }
            }
            k2 += 2;
        }
    }

    // The paths never overlapped: the texts share no common character.
    vec![EditOp::Delete(to_string(a)), EditOp::Insert(to_string(b))]
}

fn split(a: &[char], b: &[char], x: usize, y: usize) -> Vec<EditOp> {
    let mut ops = diff_chars(&a[..x], &b[..y]);
    ops.extend(diff_chars(&a[x..], &b[y..]));
    ops
}

pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub(crate) fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub(crate) fn to_string(chars: &[char]) -> String {
    chars.iter().collect()
}
