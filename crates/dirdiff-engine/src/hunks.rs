//! Hunk construction: edit scripts grouped into context-padded regions.

use serde::{Deserialize, Serialize};

use crate::myers::EditOp;

/// A single line in a diff hunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLine {
    /// A line present in both original and modified (context).
    Context(String),
    /// A line added in the modified content.
    Added(String),
    /// A line removed from the original content.
    Removed(String),
}

/// A contiguous region of changes plus surrounding context.
///
/// Hunks are ordered by ascending original-file line number and never
/// overlap. Start positions are 1-based; a hunk with an empty side keeps
/// the position at which the change applies and a count of zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// Line number in the original content where this hunk starts.
    pub old_start: usize,
    /// Number of original-content lines covered by this hunk.
    pub old_count: usize,
    /// Line number in the modified content where this hunk starts.
    pub new_start: usize,
    /// Number of modified-content lines covered by this hunk.
    pub new_count: usize,
    /// The hunk body in script order.
    pub lines: Vec<DiffLine>,
}

/// Split text into lines for diffing.
///
/// A trailing newline terminates the final line instead of opening an
/// empty one, and a trailing `\r` is stripped from each line, so CRLF
/// content and a trailing-newline presence difference cannot manufacture
/// spurious edits on their own.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Group an edit script into hunks with up to `context` unchanged lines
/// on each side of every change run.
///
/// Two change runs whose context windows would touch or overlap
/// (separation of at most `2 * context` unchanged lines) are merged into
/// one hunk. Line counts reported elsewhere are taken from the script
/// itself and are unaffected by the grouping.
pub fn build_hunks(ops: &[EditOp], a: &[&str], b: &[&str], context: usize) -> Vec<DiffHunk> {
    let changes: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| op.is_change())
        .map(|(i, _)| i)
        .collect();
    if changes.is_empty() {
        return Vec::new();
    }

    // (old, new) position reached before each op.
    let mut coords = Vec::with_capacity(ops.len());
    let (mut old, mut new) = (0usize, 0usize);
    for op in ops {
        coords.push((old, new));
        match op {
            EditOp::Keep { .. } => {
                old += 1;
                new += 1;
            }
            EditOp::Delete { .. } => old += 1,
            EditOp::Insert { .. } => new += 1,
        }
    }

    // Maximal change runs, merged when their windows would meet.
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for &idx in &changes {
        match groups.last_mut() {
            Some((_, last)) if idx - *last - 1 <= 2 * context => *last = idx,
            _ => groups.push((idx, idx)),
        }
    }

    groups
        .into_iter()
        .map(|(first, last)| {
            let start = first.saturating_sub(context);
            let end = (last + context).min(ops.len() - 1);

            let mut lines = Vec::with_capacity(end - start + 1);
            let (mut old_count, mut new_count) = (0usize, 0usize);
            for op in &ops[start..=end] {
                match op {
                    EditOp::Keep { old_index, .. } => {
                        lines.push(DiffLine::Context(a[*old_index].to_string()));
                        old_count += 1;
                        new_count += 1;
                    }
                    EditOp::Delete { old_index } => {
                        lines.push(DiffLine::Removed(a[*old_index].to_string()));
                        old_count += 1;
                    }
                    EditOp::Insert { new_index } => {
                        lines.push(DiffLine::Added(b[*new_index].to_string()));
                        new_count += 1;
                    }
                }
            }

            DiffHunk {
                old_start: coords[start].0 + 1,
                old_count,
                new_start: coords[start].1 + 1,
                new_count,
                lines,
            }
        })
        .collect()
}
