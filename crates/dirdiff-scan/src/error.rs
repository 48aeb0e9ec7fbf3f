//! Error types for tree scanning.

use std::path::PathBuf;

/// Errors that can occur while filtering or walking a tree.
///
/// Only root-level problems are raised as errors; failures on individual
/// entries during the walk are demoted to [`crate::ScanWarning`]s.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root directory does not exist.
    #[error("root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// An ignore pattern could not be compiled.
    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },
}

/// Convenience alias for scan results.
pub type ScanResult<T> = Result<T, ScanError>;
