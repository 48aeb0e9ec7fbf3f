//! File entry types produced by the tree walker.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single regular file discovered under a scanned root.
///
/// The relative path uses `/` separators on every platform and is the
/// unique join key between the two compared trees. Entries are immutable
/// once produced; content inspection (fingerprinting, binary detection)
/// happens downstream and only for paths that need it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scanned root, `/`-separated.
    pub rel_path: String,
    /// Absolute location on disk.
    pub abs_path: PathBuf,
    /// File size in bytes.
    pub size: u64,
}

impl FileEntry {
    /// Create a new file entry.
    pub fn new(rel_path: impl Into<String>, abs_path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            rel_path: rel_path.into(),
            abs_path: abs_path.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_keeps_relative_path_verbatim() {
        let entry = FileEntry::new("src/main.rs", "/tmp/tree/src/main.rs", 42);
        assert_eq!(entry.rel_path, "src/main.rs");
        assert_eq!(entry.size, 42);
    }
}
