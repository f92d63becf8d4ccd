//! Checksum report: labelled attribution strings plus the master key digest.

use super::{byte_array_literal, sha256, DIGEST_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One labelled string to hash (e.g. `_S1 = "rajdeep-das"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionEntry {
    pub label: String,
    pub value: String,
}

impl AttributionEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A hashed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
    pub label: String,
    pub value: String,
    pub digest: [u8; DIGEST_LEN],
}

impl DigestRecord {
    pub fn from_entry(entry: &AttributionEntry) -> Self {
        Self {
            label: entry.label.clone(),
            value: entry.value.clone(),
            digest: sha256(entry.value.as_bytes()),
        }
    }

    pub fn hex(&self) -> String {
        hex::encode(self.digest)
    }

    pub fn byte_array_literal(&self) -> String {
        byte_array_literal(&self.digest)
    }
}

/// Digests for every entry in order, followed by the master key digest.
///
/// `Display` renders the full printable report.
#[derive(Debug, Clone)]
pub struct ChecksumReport {
    pub records: Vec<DigestRecord>,
    pub master_key: String,
    pub master_digest: [u8; DIGEST_LEN],
}

impl ChecksumReport {
    pub fn build(entries: &[AttributionEntry], master_key: &str) -> Self {
        let records = entries.iter().map(DigestRecord::from_entry).collect();
        tracing::debug!(entries = entries.len(), "computed attribution digests");
        Self {
            records,
            master_key: master_key.to_string(),
            master_digest: sha256(master_key.as_bytes()),
        }
    }

    pub fn master_hex(&self) -> String {
        hex::encode(self.master_digest)
    }
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generating SHA-256 checksums for attribution strings...")?;
        writeln!(f)?;
        for r in &self.records {
            writeln!(f, "{}: '{}'", r.label, r.value)?;
            writeln!(f, "  SHA-256: {}", r.hex())?;
            writeln!(f, "  Dart array: {}", r.byte_array_literal())?;
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "=== MASTER KEY ===")?;
        writeln!(f, "Master Key: {}", self.master_key)?;
        writeln!(f, "Master Key SHA-256: {}", self.master_hex())?;
        writeln!(f)?;
        writeln!(f, "⚠️  KEEP THIS KEY SECURE - Only you should have this key!")?;
        writeln!(f, "   Key: {}", self.master_key)
    }
}
