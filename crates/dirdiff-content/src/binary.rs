//! Text/binary classification from a bounded content sample.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ContentResult;

/// How many leading bytes are sampled for classification.
pub const SAMPLE_SIZE: usize = 8 * 1024;

/// Fraction of non-printable bytes above which a sample counts as binary.
const NON_PRINTABLE_THRESHOLD: f64 = 0.30;

/// Classify a content sample as binary.
///
/// A NUL byte anywhere in the sample is decisive. Otherwise the sample is
/// binary when the share of non-printable bytes exceeds the threshold.
/// Bytes ≥ 0x80 are not counted as non-printable so multi-byte UTF-8 text
/// passes; content the heuristic cannot confidently call text lands on
/// the binary side by construction.
pub fn sample_is_binary(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }
    if sample.contains(&0) {
        return true;
    }

    let non_printable = sample.iter().filter(|&&b| is_non_printable(b)).count();
    (non_printable as f64) / (sample.len() as f64) > NON_PRINTABLE_THRESHOLD
}

fn is_non_printable(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F)
}

/// Classify a file by sampling its first [`SAMPLE_SIZE`] bytes.
pub fn file_is_binary(path: &Path) -> ContentResult<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; SAMPLE_SIZE];
    let mut filled = 0;

    // Read::read may return short counts; fill as much of the sample as
    // the file allows.
    loop {
        let n = file.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == SAMPLE_SIZE {
            break;
        }
    }

    Ok(sample_is_binary(&buffer[..filled]))
}
