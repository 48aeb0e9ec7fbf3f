//! Path exclusion rules.
//!
//! A [`PathFilter`] is built once per run from the filter configuration;
//! all glob patterns are compiled into a single matcher set up front so
//! that testing a path stays O(1)-ish and the walk remains linear in the
//! number of entries.

use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};

/// Filter configuration consumed by [`PathFilter`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Directory names to prune entirely (exact match against any path segment).
    pub ignore_dirs: Vec<String>,
    /// Glob patterns matched against file basenames.
    pub ignore_files: Vec<String>,
    /// Optional extension whitelist. Entries may be given with or without
    /// a leading dot; matching is case-insensitive.
    pub extensions: Option<Vec<String>>,
}

/// Compiled exclusion predicate for directories and files.
pub struct PathFilter {
    ignore_dirs: HashSet<String>,
    ignore_files: GlobSet,
    /// Normalized to lowercase with a leading dot, e.g. `".ts"`.
    extensions: Option<HashSet<String>>,
}

impl PathFilter {
    /// Compile a filter from its configuration.
    ///
    /// Fails if any ignore pattern is not a valid glob.
    pub fn new(config: &FilterConfig) -> ScanResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.ignore_files {
            let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let ignore_files = builder.build().map_err(|source| ScanError::InvalidPattern {
            pattern: config.ignore_files.join(", "),
            source,
        })?;

        let extensions = config.extensions.as_ref().map(|exts| {
            exts.iter()
                .map(|e| {
                    let e = e.to_lowercase();
                    if e.starts_with('.') {
                        e
                    } else {
                        format!(".{e}")
                    }
                })
                .collect()
        });

        Ok(Self {
            ignore_dirs: config.ignore_dirs.iter().cloned().collect(),
            ignore_files,
            extensions,
        })
    }

    /// Returns `true` if a directory with this name must be pruned.
    ///
    /// Pruning short-circuits recursion: nothing beneath an ignored
    /// directory is ever enumerated, whitelist or not.
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name)
    }

    /// Returns `true` if a file at this path must be excluded.
    pub fn excludes_file(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name() {
            if self.ignore_files.is_match(Path::new(name)) {
                return true;
            }
        }

        if let Some(whitelist) = &self.extensions {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{}", e.to_lowercase()));
            return match ext {
                Some(ext) => !whitelist.contains(&ext),
                None => true,
            };
        }

        false
    }
}
