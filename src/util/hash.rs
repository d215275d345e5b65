use sha1::{Digest, Sha1};

/// Number of hex characters kept from a full checksum.
pub const CHECKSUM_HEX_LEN: usize = 12;

/// Name of the hash algorithm backing every checksum.
pub const DIGEST_ALGORITHM: &str = "sha1";

/// Streaming SHA-1 hasher that renders a truncated lowercase hex checksum.
#[derive(Debug, Clone)]
pub struct ChecksumHasher {
    state: Sha1,
}

impl ChecksumHasher {
    pub fn new() -> Self {
        Self { state: Sha1::new() }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    /// Returns at most `len` leading hex characters of the digest.
    pub fn finish_hex(self, len: usize) -> String {
        let mut encoded = hex::encode(self.state.finalize());
        encoded.truncate(len);
        encoded
    }
}

impl Default for ChecksumHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes `parts` back to back, with no separator, and keeps the first
/// [`CHECKSUM_HEX_LEN`] hex characters.
pub fn checksum<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut hasher = ChecksumHasher::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hasher.finish_hex(CHECKSUM_HEX_LEN)
}
