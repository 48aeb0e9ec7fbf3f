//! Recursive tree enumeration through a [`PathFilter`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use walkdir::WalkDir;

use crate::entry::FileEntry;
use crate::error::{ScanError, ScanResult};
use crate::filter::PathFilter;

/// A non-fatal failure encountered while scanning one tree.
///
/// The affected entry is excluded from the snapshot; the warning travels
/// with the final report instead of aborting the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// The path that could not be processed (best effort, may be the root).
    pub path: String,
    /// Human-readable failure description.
    pub reason: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// The result of scanning one root: all surviving files plus any
/// contained failures.
#[derive(Debug)]
pub struct TreeSnapshot {
    /// The scanned root.
    pub root: PathBuf,
    /// Discovered files keyed by `/`-separated relative path.
    pub entries: BTreeMap<String, FileEntry>,
    /// Per-entry failures that were skipped over.
    pub warnings: Vec<ScanWarning>,
}

/// Enumerates all non-excluded regular files under a root.
///
/// Symbolic links are not followed: a symlinked directory is never
/// descended into and a symlinked file is skipped. Traversal order is
/// unspecified; the snapshot map imposes lexicographic ordering on the
/// relative paths it holds.
pub struct TreeWalker<'a> {
    root: PathBuf,
    filter: &'a PathFilter,
}

impl<'a> TreeWalker<'a> {
    /// Create a walker for `root` using the given filter.
    pub fn new(root: impl Into<PathBuf>, filter: &'a PathFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    /// Walk the tree and produce a snapshot.
    ///
    /// A missing or non-directory root is fatal and raised before any
    /// walking begins. Everything else degrades to [`ScanWarning`]s.
    pub fn walk(&self) -> ScanResult<TreeSnapshot> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::RootNotADirectory(self.root.clone()));
        }

        let mut entries = BTreeMap::new();
        let mut warnings = Vec::new();

        let iter = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 || !e.file_type().is_dir() {
                    return true;
                }
                !self
                    .filter
                    .excludes_dir(&e.file_name().to_string_lossy())
            });

        for item in iter {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    warn!(path = %path, error = %err, "skipping unreadable entry");
                    warnings.push(ScanWarning::new(path, err.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.filter.excludes_file(path) {
                continue;
            }

            let rel_path = match relative_slash_path(path, &self.root) {
                Some(rel) => rel,
                None => {
                    warnings.push(ScanWarning::new(
                        path.display().to_string(),
                        "path is not under the scanned root",
                    ));
                    continue;
                }
            };

            match entry.metadata() {
                Ok(meta) => {
                    entries.insert(
                        rel_path.clone(),
                        FileEntry::new(rel_path, path, meta.len()),
                    );
                }
                Err(err) => {
                    warn!(path = %rel_path, error = %err, "skipping entry without metadata");
                    warnings.push(ScanWarning::new(rel_path, err.to_string()));
                }
            }
        }

        Ok(TreeSnapshot {
            root: self.root.clone(),
            entries,
            warnings,
        })
    }
}

/// Express `path` relative to `root` with `/` separators.
fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
