use seedprint::util::hash::{CHECKSUM_HEX_LEN, ChecksumHasher, DIGEST_ALGORITHM, checksum};

#[test]
fn default_tool_parts_checksum() {
    assert_eq!(checksum(["codex", "demo"]), "e4fafd982d02");
}

#[test]
fn checksum_accepts_byte_parts() {
    let parts: Vec<Vec<u8>> = vec![b"demo".to_vec(), b":7".to_vec()];
    assert_eq!(checksum(parts), "9b3515404bdb");
}

#[test]
fn checksum_is_truncated_sha1() {
    assert_eq!(DIGEST_ALGORITHM, "sha1");
    let mut hasher = ChecksumHasher::new();
    hasher.update(b"codexdemo");
    let full = hasher.finish_hex(40);
    assert_eq!(full.len(), 40);
    assert_eq!(&full[..CHECKSUM_HEX_LEN], checksum(["codexdemo"]));
}
