//! Error types for the comparison engine.

/// Errors that abort a comparison run.
///
/// Per-file I/O failures during hashing or diffing never surface here;
/// they are contained as report warnings. Only root-level scan failures
/// are fatal.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A tree root could not be scanned.
    #[error(transparent)]
    Scan(#[from] dirdiff_scan::ScanError),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
