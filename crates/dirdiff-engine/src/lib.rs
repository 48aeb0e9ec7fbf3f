//! Comparison engine for dirdiff.
//!
//! Turns two scanned trees into a structured change report: per-path
//! status classification, content-fingerprint change detection, and
//! line-level edit scripts grouped into context-padded hunks. The report
//! is pure data; rendering lives elsewhere.
//!
//! # Key Types
//!
//! - [`edit_script`] / [`EditOp`] -- Myers shortest edit script over two line sequences
//! - [`DiffHunk`] / [`DiffLine`] -- Context-windowed hunks with per-line operation tags
//! - [`DiffOptions`] -- Engine knobs (context width, large-file ceiling, content toggle)
//! - [`FileStatus`] / [`FileDiff`] -- Per-path comparison outcome
//! - [`DiffResult`] / [`DiffSummary`] -- The aggregated report handed to renderers
//! - [`diff_roots`] / [`compare_trees`] -- Entry points

pub mod compare;
pub mod error;
pub mod hunks;
pub mod myers;
pub mod report;

pub use compare::{diff_roots, DiffOptions, DEFAULT_MAX_DIFF_BYTES};
pub use error::{EngineError, EngineResult};
pub use hunks::{build_hunks, split_lines, DiffHunk, DiffLine};
pub use myers::{edit_script, EditOp};
pub use report::{compare_trees, DiffResult, DiffSummary, FileDiff, FileStatus, KindStats};

// The warning type travels inside `DiffResult`; re-export it so report
// consumers need not depend on the scan crate directly.
pub use dirdiff_scan::ScanWarning;
