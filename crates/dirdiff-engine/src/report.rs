//! Tree-level aggregation into the final report.
//!
//! Classifies every relative path in the union of both trees into exactly
//! one status bucket, fans the common-path comparisons out over a worker
//! pool, and folds the per-file outcomes into order-independent summary
//! counters. The resulting [`DiffResult`] is deterministic for a given
//! pair of trees and configuration, regardless of scheduling.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use dirdiff_content::classify;
use dirdiff_scan::{FileEntry, ScanWarning, TreeSnapshot};

use crate::compare::{compare_common, DiffOptions};
use crate::hunks::DiffHunk;

/// Classification of one relative path in the union of both trees.
///
/// Exactly one status per path; the five buckets partition the union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    /// Present only in the modified tree.
    Added,
    /// Present only in the original tree.
    Deleted,
    /// Present in both with identical content fingerprints.
    Unchanged,
    /// Present in both as text with differing content.
    Modified,
    /// Present in both with differing content, at least one side binary.
    BinaryModified,
}

impl FileStatus {
    /// One-character marker used by the listing renderers.
    pub fn symbol(&self) -> &'static str {
        match self {
            FileStatus::Added => "+",
            FileStatus::Deleted => "-",
            FileStatus::Unchanged => " ",
            FileStatus::Modified | FileStatus::BinaryModified => "~",
        }
    }
}

/// The comparison outcome for one relative path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// `/`-separated path relative to both roots.
    pub rel_path: String,
    pub status: FileStatus,
    /// Display category from the file type table.
    pub kind: String,
    /// Size in the original tree, if present there.
    pub size_original: Option<u64>,
    /// Size in the modified tree, if present there.
    pub size_modified: Option<u64>,
    /// Hunked line diff; non-empty only for Modified text files.
    pub hunks: Vec<DiffHunk>,
    pub lines_added: usize,
    pub lines_removed: usize,
}

/// Per-category counters for the breakdown table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub binary_modified: usize,
    pub unchanged: usize,
}

/// Overall counters for one comparison run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub files_in_original: usize,
    pub files_in_modified: usize,
    pub unchanged: usize,
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub binary_modified: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
}

/// The full comparison report handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub original_root: PathBuf,
    pub modified_root: PathBuf,
    pub summary: DiffSummary,
    /// All compared paths, ordered by relative path.
    pub files: Vec<FileDiff>,
    /// Per-category breakdown, ordered by category name.
    pub kinds: BTreeMap<String, KindStats>,
    /// Contained per-file failures from walking and comparing.
    pub warnings: Vec<ScanWarning>,
}

impl DiffResult {
    /// Returns `true` if any path differs between the trees.
    pub fn has_changes(&self) -> bool {
        self.summary.added > 0
            || self.summary.deleted > 0
            || self.summary.modified > 0
            || self.summary.binary_modified > 0
    }

    /// Files with the given status, in path order.
    pub fn files_with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileDiff> {
        self.files.iter().filter(move |f| f.status == status)
    }
}

/// Compare two scanned trees into a [`DiffResult`].
pub fn compare_trees(
    original: &TreeSnapshot,
    modified: &TreeSnapshot,
    options: &DiffOptions,
) -> DiffResult {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut warnings: Vec<ScanWarning> = original
        .warnings
        .iter()
        .chain(modified.warnings.iter())
        .cloned()
        .collect();

    // Paths on one side only need no content inspection.
    for (path, entry) in &original.entries {
        if !modified.entries.contains_key(path) {
            files.push(one_sided(path, entry, FileStatus::Deleted));
        }
    }
    for (path, entry) in &modified.entries {
        if !original.entries.contains_key(path) {
            files.push(one_sided(path, entry, FileStatus::Added));
        }
    }

    // Common paths carry all the I/O; fan them out. Each task owns its
    // own handles and buffers, and the fold below is commutative, so
    // completion order cannot influence the result.
    let common: Vec<(&String, &FileEntry, &FileEntry)> = original
        .entries
        .iter()
        .filter_map(|(path, a)| modified.entries.get(path).map(|b| (path, a, b)))
        .collect();

    let outcomes: Vec<Result<FileDiff, ScanWarning>> = common
        .par_iter()
        .map(|(path, a, b)| {
            compare_common(a, b, options).map(|outcome| FileDiff {
                rel_path: (*path).clone(),
                status: outcome.status,
                kind: classify(path),
                size_original: Some(a.size),
                size_modified: Some(b.size),
                hunks: outcome.hunks,
                lines_added: outcome.lines_added,
                lines_removed: outcome.lines_removed,
            })
        })
        .collect();

    for outcome in outcomes {
        match outcome {
            Ok(file) => files.push(file),
            Err(warning) => warnings.push(warning),
        }
    }

    files.sort_by(|x, y| x.rel_path.cmp(&y.rel_path));

    let mut summary = DiffSummary {
        files_in_original: original.entries.len(),
        files_in_modified: modified.entries.len(),
        ..Default::default()
    };
    let mut kinds: BTreeMap<String, KindStats> = BTreeMap::new();

    for file in &files {
        let stats = kinds.entry(file.kind.clone()).or_default();
        match file.status {
            FileStatus::Added => {
                summary.added += 1;
                stats.added += 1;
            }
            FileStatus::Deleted => {
                summary.deleted += 1;
                stats.deleted += 1;
            }
            FileStatus::Unchanged => {
                summary.unchanged += 1;
                stats.unchanged += 1;
            }
            FileStatus::Modified => {
                summary.modified += 1;
                stats.modified += 1;
            }
            FileStatus::BinaryModified => {
                summary.binary_modified += 1;
                stats.binary_modified += 1;
            }
        }
        summary.lines_added += file.lines_added;
        summary.lines_removed += file.lines_removed;
    }

    DiffResult {
        original_root: original.root.clone(),
        modified_root: modified.root.clone(),
        summary,
        files,
        kinds,
        warnings,
    }
}

fn one_sided(path: &str, entry: &FileEntry, status: FileStatus) -> FileDiff {
    let (size_original, size_modified) = match status {
        FileStatus::Deleted => (Some(entry.size), None),
        _ => (None, Some(entry.size)),
    };
    FileDiff {
        rel_path: path.to_string(),
        status,
        kind: classify(path),
        size_original,
        size_modified,
        hunks: Vec::new(),
        lines_added: 0,
        lines_removed: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunks::DiffLine;
    use dirdiff_scan::{FilterConfig, PathFilter, TreeWalker};
    use std::fs;
    use std::path::Path;

    fn write_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path, config: &FilterConfig) -> TreeSnapshot {
        let filter = PathFilter::new(config).unwrap();
        TreeWalker::new(root, &filter).walk().unwrap()
    }

    fn compare(
        original: &Path,
        modified: &Path,
        config: &FilterConfig,
        options: &DiffOptions,
    ) -> DiffResult {
        compare_trees(&scan(original, config), &scan(modified, config), options)
    }

    fn compare_default(original: &Path, modified: &Path) -> DiffResult {
        compare(
            original,
            modified,
            &FilterConfig::default(),
            &DiffOptions::default(),
        )
    }

    fn file<'r>(result: &'r DiffResult, path: &str) -> &'r FileDiff {
        result
            .files
            .iter()
            .find(|f| f.rel_path == path)
            .unwrap_or_else(|| panic!("no entry for {path}"))
    }

    #[test]
    fn identical_trees_report_everything_unchanged() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("x.txt"), b"same\n");
        write_file(&b.path().join("x.txt"), b"same\n");

        let result = compare_default(a.path(), b.path());
        assert!(!result.has_changes());
        assert_eq!(result.summary.unchanged, 1);
        assert_eq!(file(&result, "x.txt").status, FileStatus::Unchanged);
        assert!(file(&result, "x.txt").hunks.is_empty());
    }

    #[test]
    fn one_sided_files_are_added_and_deleted_without_hunks() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("gone.txt"), b"old\n");
        write_file(&b.path().join("new.txt"), b"new\n");

        let result = compare_default(a.path(), b.path());
        assert_eq!(file(&result, "gone.txt").status, FileStatus::Deleted);
        assert_eq!(file(&result, "new.txt").status, FileStatus::Added);
        assert!(file(&result, "gone.txt").hunks.is_empty());
        assert!(file(&result, "new.txt").hunks.is_empty());
        assert_eq!(result.summary.added, 1);
        assert_eq!(result.summary.deleted, 1);
    }

    #[test]
    fn modified_text_file_carries_the_expected_hunk() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("a.txt"), b"line1\nline2\n");
        write_file(&b.path().join("a.txt"), b"line1\nline2x\n");

        let options = DiffOptions {
            context_lines: 1,
            ..Default::default()
        };
        let result = compare(a.path(), b.path(), &FilterConfig::default(), &options);

        let diff = file(&result, "a.txt");
        assert_eq!(diff.status, FileStatus::Modified);
        assert_eq!(diff.lines_added, 1);
        assert_eq!(diff.lines_removed, 1);
        assert_eq!(diff.hunks.len(), 1);

        let hunk = &diff.hunks[0];
        assert_eq!(hunk.old_start, 1);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(
            hunk.lines,
            vec![
                DiffLine::Context("line1".into()),
                DiffLine::Removed("line2".into()),
                DiffLine::Added("line2x".into()),
            ]
        );

        assert_eq!(result.summary.lines_added, 1);
        assert_eq!(result.summary.lines_removed, 1);
    }

    #[test]
    fn binary_files_never_carry_hunks() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("blob.bin"), &[0u8, 1, 2, 3]);
        write_file(&b.path().join("blob.bin"), &[0u8, 9, 9, 9]);

        let result = compare_default(a.path(), b.path());
        let diff = file(&result, "blob.bin");
        assert_eq!(diff.status, FileStatus::BinaryModified);
        assert!(diff.hunks.is_empty());
        assert_eq!(result.summary.binary_modified, 1);
    }

    #[test]
    fn statuses_partition_the_path_union() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("same.txt"), b"same\n");
        write_file(&b.path().join("same.txt"), b"same\n");
        write_file(&a.path().join("changed.txt"), b"one\n");
        write_file(&b.path().join("changed.txt"), b"two\n");
        write_file(&a.path().join("deleted.txt"), b"bye\n");
        write_file(&b.path().join("added.txt"), b"hi\n");
        write_file(&a.path().join("bin.dat"), &[0u8, 1]);
        write_file(&b.path().join("bin.dat"), &[0u8, 2]);

        let result = compare_default(a.path(), b.path());

        // 5 distinct paths in the union, one status each.
        assert_eq!(result.files.len(), 5);
        let s = &result.summary;
        assert_eq!(
            s.unchanged + s.added + s.deleted + s.modified + s.binary_modified,
            5
        );
    }

    #[test]
    fn extension_whitelist_excludes_files_from_all_counts() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("a.ts"), b"let x = 1;\n");
        write_file(&b.path().join("a.ts"), b"let x = 2;\n");
        write_file(&a.path().join("b.css"), b"body {}\n");
        write_file(&b.path().join("b.css"), b"html {}\n");

        let config = FilterConfig {
            extensions: Some(vec![".ts".into()]),
            ..Default::default()
        };
        let result = compare(a.path(), b.path(), &config, &DiffOptions::default());

        assert_eq!(result.files.len(), 1);
        assert_eq!(file(&result, "a.ts").status, FileStatus::Modified);
        assert_eq!(result.summary.files_in_original, 1);
        assert_eq!(result.summary.files_in_modified, 1);
        assert!(!result.kinds.contains_key("CSS"));
    }

    #[test]
    fn oversized_files_report_modified_without_hunks() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("big.txt"), b"0123456789\nmore\n");
        write_file(&b.path().join("big.txt"), b"0123456789\nless\n");

        let options = DiffOptions {
            max_diff_bytes: 8,
            ..Default::default()
        };
        let result = compare(a.path(), b.path(), &FilterConfig::default(), &options);

        let diff = file(&result, "big.txt");
        assert_eq!(diff.status, FileStatus::Modified);
        assert!(diff.hunks.is_empty());
        assert_eq!(diff.lines_added, 0);
        assert_eq!(diff.lines_removed, 0);
    }

    #[test]
    fn show_content_off_suppresses_hunks_and_counts() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("f.txt"), b"one\n");
        write_file(&b.path().join("f.txt"), b"two\n");

        let options = DiffOptions {
            show_content: false,
            ..Default::default()
        };
        let result = compare(a.path(), b.path(), &FilterConfig::default(), &options);

        let diff = file(&result, "f.txt");
        assert_eq!(diff.status, FileStatus::Modified);
        assert!(diff.hunks.is_empty());
        assert_eq!(result.summary.lines_added, 0);
    }

    #[test]
    fn trailing_newline_only_difference_yields_no_edits() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("f.txt"), b"one\ntwo\n");
        write_file(&b.path().join("f.txt"), b"one\ntwo");

        let result = compare_default(a.path(), b.path());
        let diff = file(&result, "f.txt");

        // The bytes differ, so the file is Modified, but no line was
        // actually edited.
        assert_eq!(diff.status, FileStatus::Modified);
        assert!(diff.hunks.is_empty());
        assert_eq!(diff.lines_added, 0);
        assert_eq!(diff.lines_removed, 0);
    }

    #[test]
    fn kind_breakdown_tags_every_path() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&a.path().join("app.ts"), b"a\n");
        write_file(&b.path().join("app.ts"), b"b\n");
        write_file(&b.path().join("site.css"), b"c\n");

        let result = compare_default(a.path(), b.path());
        assert_eq!(result.kinds["TypeScript"].modified, 1);
        assert_eq!(result.kinds["CSS"].added, 1);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        for i in 0..20 {
            write_file(
                &a.path().join(format!("f{i}.txt")),
                format!("alpha {i}\nbeta\n").as_bytes(),
            );
            write_file(
                &b.path().join(format!("f{i}.txt")),
                format!("alpha {i}\ngamma\n").as_bytes(),
            );
        }

        let first = compare_default(a.path(), b.path());
        let second = compare_default(a.path(), b.path());
        assert_eq!(first, second);
    }

    #[test]
    fn files_are_ordered_by_relative_path() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_file(&b.path().join("z.txt"), b"z\n");
        write_file(&b.path().join("a.txt"), b"a\n");
        write_file(&b.path().join("m/n.txt"), b"n\n");

        let result = compare_default(a.path(), b.path());
        let paths: Vec<_> = result.files.iter().map(|f| f.rel_path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }
}
