use std::io::Write;

use crate::domain::error::ChecksumError;
use crate::util::hash::checksum;

/// Parts hashed when the caller passes none.
pub const DEFAULT_CHECKSUM_PARTS: [&str; 2] = ["codex", "demo"];

/// Checksum of `parts`, or of [`DEFAULT_CHECKSUM_PARTS`] when empty.
pub fn execute(parts: &[String]) -> String {
    if parts.is_empty() {
        checksum(DEFAULT_CHECKSUM_PARTS)
    } else {
        checksum(parts)
    }
}

/// Execute `checksum` and write the digest line to `output`.
pub fn run<W: Write>(parts: &[String], mut output: W) -> Result<String, ChecksumError> {
    let digest = execute(parts);
    writeln!(output, "{digest}")
        .and_then(|()| output.flush())
        .map_err(|source| ChecksumError::WriteOutput { source })?;
    Ok(digest)
}
