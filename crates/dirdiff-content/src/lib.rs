//! Content inspection for dirdiff.
//!
//! Everything here answers questions about a single file's bytes: what is
//! its content fingerprint, does it look like text or binary, and what
//! display category does it belong to.
//!
//! # Key Types
//!
//! - [`Fingerprint`] -- 256-bit BLAKE3 content digest; equality means byte identity
//! - [`fingerprint_file`] -- Streamed digest computation with bounded memory
//! - [`file_is_binary`] / [`sample_is_binary`] -- Text/binary classification from a content prefix
//! - [`classify`] -- Extension/basename to display category mapping

pub mod binary;
pub mod error;
pub mod file_kind;
pub mod hasher;

pub use binary::{file_is_binary, sample_is_binary, SAMPLE_SIZE};
pub use error::{ContentError, ContentResult};
pub use file_kind::classify;
pub use hasher::{fingerprint_bytes, fingerprint_file, Fingerprint};
