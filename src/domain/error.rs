use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced by the `generate` command boundary.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Seed argument is not a decimal integer within the `i64` range.
    #[error("invalid seed `{value}`: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Report could not be written to the output stream.
    #[error("failed to write report: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by the `checksum` command boundary.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// Digest could not be written to the output stream.
    #[error("failed to write checksum: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}
