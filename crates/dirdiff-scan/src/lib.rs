//! Filtered directory tree enumeration for dirdiff.
//!
//! Walks a root directory, applies the configured exclusion rules, and
//! produces a snapshot mapping relative paths to file entries. Per-entry
//! I/O failures are collected as warnings rather than aborting the walk.
//!
//! # Key Types
//!
//! - [`PathFilter`] / [`FilterConfig`] -- Exclusion rules (ignored dirs, glob patterns, extension whitelist)
//! - [`TreeWalker`] / [`TreeSnapshot`] -- Recursive enumeration of one tree
//! - [`FileEntry`] -- A single discovered file (relative path, location, size)
//! - [`ScanWarning`] -- A contained per-entry failure

pub mod entry;
pub mod error;
pub mod filter;
pub mod walker;

pub use entry::FileEntry;
pub use error::{ScanError, ScanResult};
pub use filter::{FilterConfig, PathFilter};
pub use walker::{ScanWarning, TreeSnapshot, TreeWalker};
