//! Per-file comparison pipeline.
//!
//! For a path present in both trees: fingerprint both sides, then gate
//! binary content away from the line diff, then hand text content to the
//! edit-script engine. Every I/O failure on the way is contained as a
//! warning for the report rather than raised.

use std::fs;
use std::path::Path;

use tracing::debug;

use dirdiff_content::{file_is_binary, fingerprint_file, ContentError};
use dirdiff_scan::{FileEntry, PathFilter, ScanWarning, TreeWalker};

use crate::error::EngineResult;
use crate::hunks::{build_hunks, split_lines, DiffHunk};
use crate::myers::{change_totals, edit_script};
use crate::report::{compare_trees, DiffResult, FileStatus};

/// Ceiling above which the line diff is skipped for a file.
pub const DEFAULT_MAX_DIFF_BYTES: u64 = 4 * 1024 * 1024;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Unchanged lines kept around each change run in a hunk.
    pub context_lines: usize,
    /// Files larger than this on either side report Modified without
    /// hunks instead of being line-diffed.
    pub max_diff_bytes: u64,
    /// When `false`, content is never read for text comparison; changed
    /// text files report Modified with no hunks and no line counts.
    pub show_content: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            max_diff_bytes: DEFAULT_MAX_DIFF_BYTES,
            show_content: true,
        }
    }
}

/// Scan both roots through the filter and compare the resulting trees.
///
/// A missing or non-directory root aborts here; everything downstream is
/// contained per file.
pub fn diff_roots(
    original_root: &Path,
    modified_root: &Path,
    filter: &PathFilter,
    options: &DiffOptions,
) -> EngineResult<DiffResult> {
    let original = TreeWalker::new(original_root, filter).walk()?;
    let modified = TreeWalker::new(modified_root, filter).walk()?;
    Ok(compare_trees(&original, &modified, options))
}

/// Outcome of comparing one common path.
pub(crate) struct CommonOutcome {
    pub status: FileStatus,
    pub hunks: Vec<DiffHunk>,
    pub lines_added: usize,
    pub lines_removed: usize,
}

impl CommonOutcome {
    fn plain(status: FileStatus) -> Self {
        Self {
            status,
            hunks: Vec::new(),
            lines_added: 0,
            lines_removed: 0,
        }
    }
}

/// Compare one path present in both trees.
pub(crate) fn compare_common(
    a: &FileEntry,
    b: &FileEntry,
    options: &DiffOptions,
) -> Result<CommonOutcome, ScanWarning> {
    let fp_a = fingerprint_file(&a.abs_path).map_err(|e| read_warning(a, e))?;
    let fp_b = fingerprint_file(&b.abs_path).map_err(|e| read_warning(b, e))?;
    if fp_a == fp_b {
        return Ok(CommonOutcome::plain(FileStatus::Unchanged));
    }

    let binary_a = file_is_binary(&a.abs_path).map_err(|e| read_warning(a, e))?;
    let binary_b = file_is_binary(&b.abs_path).map_err(|e| read_warning(b, e))?;
    if binary_a || binary_b {
        return Ok(CommonOutcome::plain(FileStatus::BinaryModified));
    }

    if a.size > options.max_diff_bytes || b.size > options.max_diff_bytes {
        debug!(
            path = %a.rel_path,
            size_original = a.size,
            size_modified = b.size,
            "line diff bypassed for oversized file"
        );
        return Ok(CommonOutcome::plain(FileStatus::Modified));
    }

    if !options.show_content {
        return Ok(CommonOutcome::plain(FileStatus::Modified));
    }

    let bytes_a = fs::read(&a.abs_path).map_err(|e| read_warning(a, ContentError::Io(e)))?;
    let bytes_b = fs::read(&b.abs_path).map_err(|e| read_warning(b, ContentError::Io(e)))?;

    // Content that defeats the sampler but is not valid UTF-8 is not
    // reliably line-splittable; fall back to the binary verdict.
    let (Ok(text_a), Ok(text_b)) = (String::from_utf8(bytes_a), String::from_utf8(bytes_b)) else {
        return Ok(CommonOutcome::plain(FileStatus::BinaryModified));
    };

    let lines_a = split_lines(&text_a);
    let lines_b = split_lines(&text_b);
    let ops = edit_script(&lines_a, &lines_b);
    let (lines_added, lines_removed) = change_totals(&ops);
    let hunks = build_hunks(&ops, &lines_a, &lines_b, options.context_lines);

    Ok(CommonOutcome {
        status: FileStatus::Modified,
        hunks,
        lines_added,
        lines_removed,
    })
}

fn read_warning(entry: &FileEntry, error: ContentError) -> ScanWarning {
    ScanWarning::new(
        entry.rel_path.clone(),
        format!("could not read for comparison: {error}"),
    )
}
