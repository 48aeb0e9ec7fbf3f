//! Myers shortest edit script.
//!
//! Greedy O((N+M)·D) search over the edit graph: the forward pass records
//! the furthest-reaching x coordinate per diagonal for each edit distance
//! d, the backward pass replays the trace into an ordered edit script.
//! Runs of equal elements ("snakes") are followed eagerly, so the cost is
//! governed by the number of differences, not the sequence lengths.

/// One step of an edit script.
///
/// Indices are 0-based positions into the original (`old_index`) and
/// modified (`new_index`) sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// The element is present unchanged on both sides.
    Keep { old_index: usize, new_index: usize },
    /// The element exists only in the original sequence.
    Delete { old_index: usize },
    /// The element exists only in the modified sequence.
    Insert { new_index: usize },
}

impl EditOp {
    /// Returns `true` for delete/insert operations.
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Keep { .. })
    }
}

/// Compute the shortest edit script turning `a` into `b`.
///
/// The script is ordered: old indices of keeps/deletes ascend, as do new
/// indices of keeps/inserts. Deletions within a change run precede the
/// insertions that replace them.
pub fn edit_script<T: PartialEq>(a: &[T], b: &[T]) -> Vec<EditOp> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    if max == 0 {
        return Vec::new();
    }
    let offset = max;

    // v[offset + k] holds the furthest x reached on diagonal k = x - y.
    let mut v = vec![0isize; (2 * max + 1) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();
    let mut distance = 0;

    'search: for d in 0..=max {
        for k in (-d..=d).step_by(2) {
            let idx = (offset + k) as usize;
            let mut x = if k == -d {
                v[idx + 1]
            } else if k == d {
                v[idx - 1] + 1
            } else if v[idx - 1] + 1 > v[idx + 1] {
                v[idx - 1] + 1
            } else {
                v[idx + 1]
            };
            let mut y = x - k;

            // Follow the snake.
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                trace.push(v.clone());
                distance = d;
                break 'search;
            }
        }
        trace.push(v.clone());
    }

    backtrack(&trace, distance, n, m, offset)
}

fn backtrack(
    trace: &[Vec<isize>],
    distance: isize,
    n: isize,
    m: isize,
    offset: isize,
) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let (mut x, mut y) = (n, m);

    for d in (1..=distance).rev() {
        let prev = &trace[(d - 1) as usize];
        let k = x - y;

        let from_insert = k == -d || (k != d && prev[(offset + k - 1) as usize] < prev[(offset + k + 1) as usize]);
        let prev_k = if from_insert { k + 1 } else { k - 1 };
        let prev_x = prev[(offset + prev_k) as usize];
        let prev_y = prev_x - prev_k;

        // Snake back over the trailing diagonal of this step.
        while x > prev_x && y > prev_y {
            ops.push(EditOp::Keep {
                old_index: (x - 1) as usize,
                new_index: (y - 1) as usize,
            });
            x -= 1;
            y -= 1;
        }

        if from_insert {
            ops.push(EditOp::Insert {
                new_index: prev_y as usize,
            });
        } else {
            ops.push(EditOp::Delete {
                old_index: prev_x as usize,
            });
        }

        x = prev_x;
        y = prev_y;
    }

    // Leading common prefix (the d = 0 diagonal).
    while x > 0 && y > 0 {
        ops.push(EditOp::Keep {
            old_index: (x - 1) as usize,
            new_index: (y - 1) as usize,
        });
        x -= 1;
        y -= 1;
    }

    ops.reverse();
    ops
}

/// Count insertions and deletions in a script.
///
/// Independent of any hunk grouping applied later.
pub fn change_totals(ops: &[EditOp]) -> (usize, usize) {
    let added = ops.iter().filter(|op| matches!(op, EditOp::Insert { .. })).count();
    let removed = ops.iter().filter(|op| matches!(op, EditOp::Delete { .. })).count();
    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Replay a script against its original sequence.
    fn apply<T: Clone>(a: &[T], b: &[T], ops: &[EditOp]) -> Vec<T> {
        let mut out = Vec::new();
        for op in ops {
            match op {
                EditOp::Keep { old_index, .. } => out.push(a[*old_index].clone()),
                EditOp::Insert { new_index } => out.push(b[*new_index].clone()),
                EditOp::Delete { .. } => {}
            }
        }
        out
    }

    #[test]
    fn identical_sequences_keep_everything() {
        let a = ["x", "y", "z"];
        let ops = edit_script(&a, &a);
        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| !op.is_change()));
    }

    #[test]
    fn empty_to_empty_is_empty() {
        let ops = edit_script::<&str>(&[], &[]);
        assert!(ops.is_empty());
    }

    #[test]
    fn empty_original_is_all_insertions() {
        let ops = edit_script(&[], &["a", "b"]);
        assert_eq!(
            ops,
            vec![
                EditOp::Insert { new_index: 0 },
                EditOp::Insert { new_index: 1 },
            ]
        );
    }

    #[test]
    fn empty_modified_is_all_deletions() {
        let ops = edit_script(&["a", "b"], &[]);
        assert_eq!(
            ops,
            vec![
                EditOp::Delete { old_index: 0 },
                EditOp::Delete { old_index: 1 },
            ]
        );
    }

    #[test]
    fn single_replacement_deletes_then_inserts() {
        let ops = edit_script(&["old"], &["new"]);
        assert_eq!(
            ops,
            vec![
                EditOp::Delete { old_index: 0 },
                EditOp::Insert { new_index: 0 },
            ]
        );
    }

    #[test]
    fn classic_myers_example_has_minimal_distance() {
        // The ABCABBA / CBABAC example from the paper: D = 5.
        let a: Vec<char> = "abcabba".chars().collect();
        let b: Vec<char> = "cbabac".chars().collect();
        let ops = edit_script(&a, &b);
        let changes = ops.iter().filter(|op| op.is_change()).count();
        assert_eq!(changes, 5);
        assert_eq!(apply(&a, &b, &ops), b);
    }

    #[test]
    fn mid_sequence_edit() {
        let a = ["line1", "line2", "line3", "line4"];
        let b = ["line2", "line3_modified", "line4", "line5"];
        let ops = edit_script(&a, &b);
        assert_eq!(apply(&a, &b, &ops), b);
        let (added, removed) = change_totals(&ops);
        assert_eq!((added, removed), (2, 2));
    }

    #[test]
    fn script_indices_ascend() {
        let a = ["a", "b", "c", "d", "e"];
        let b = ["a", "x", "c", "y", "e", "f"];
        let ops = edit_script(&a, &b);

        let old_indices: Vec<usize> = ops
            .iter()
            .filter_map(|op| match op {
                EditOp::Keep { old_index, .. } | EditOp::Delete { old_index } => Some(*old_index),
                EditOp::Insert { .. } => None,
            })
            .collect();
        let mut sorted = old_indices.clone();
        sorted.sort_unstable();
        assert_eq!(old_indices, sorted);
    }

    proptest! {
        #[test]
        fn script_reconstructs_modified_sequence(
            a in proptest::collection::vec(0u8..4, 0..40),
            b in proptest::collection::vec(0u8..4, 0..40),
        ) {
            let ops = edit_script(&a, &b);
            prop_assert_eq!(apply(&a, &b, &ops), b);
        }

        #[test]
        fn self_diff_has_no_changes(a in proptest::collection::vec(0u8..4, 0..40)) {
            let ops = edit_script(&a, &a);
            prop_assert_eq!(ops.iter().filter(|op| op.is_change()).count(), 0);
        }
    }
}
