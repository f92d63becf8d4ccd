//! SHA-256 digests of attribution strings, formatted for embedding in sources.
//!
//! Digests are printed two ways: lowercase hex and a byte-array literal
//! (`[0x12, 0xab, ...]`) that can be pasted into Dart, Rust or C code.

mod literal;
mod report;

pub use literal::{byte_array_literal, parse_byte_array_literal, parse_digest, LiteralError};
pub use report::{AttributionEntry, ChecksumReport, DigestRecord};

use sha2::{Digest, Sha256};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Compute SHA-256 of raw bytes.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 of the UTF-8 bytes of `text` and return it as lowercase hex.
pub fn sha256_hex(text: &str) -> String {
    hex::encode(sha256(text.as_bytes()))
}
