//! Error types for content inspection.

/// Errors from fingerprinting or sampling a file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for content results.
pub type ContentResult<T> = Result<T, ContentError>;
