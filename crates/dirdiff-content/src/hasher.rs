//! Streamed BLAKE3 content fingerprints.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentResult;

/// Read chunk size for streamed hashing.
const READ_BUF_SIZE: usize = 64 * 1024;

/// A 256-bit BLAKE3 content digest.
///
/// Two files are considered byte-identical iff their fingerprints are
/// equal; at this digest width a collision is not a practical concern for
/// the tree sizes this tool handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Wrap a raw 32-byte digest.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the full digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..12])
    }
}

/// Fingerprint a byte slice directly.
pub fn fingerprint_bytes(data: &[u8]) -> Fingerprint {
    Fingerprint::from_hash(*blake3::hash(data).as_bytes())
}

/// Fingerprint a file by streaming its content in fixed-size chunks.
///
/// Memory use is bounded by the read buffer regardless of file size.
pub fn fingerprint_file(path: &Path) -> ContentResult<Fingerprint> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; READ_BUF_SIZE];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(Fingerprint::from_hash(*hasher.finalize().as_bytes()))
}
