//! Byte-array literal formatting and parsing (`[0x12, 0xab, ...]`).

use super::DIGEST_LEN;

/// Error parsing a digest given as hex or as a byte-array literal.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LiteralError {
    #[error("expected 32 elements, found {0}")]
    WrongLength(usize),
    #[error("invalid byte element {0:?} (expected 0x00..0xff or 0..255)")]
    InvalidElement(String),
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Format a digest as a byte-array literal: `[0x12, 0xab, ...]`.
pub fn byte_array_literal(digest: &[u8; DIGEST_LEN]) -> String {
    let elems: Vec<String> = digest.iter().map(|b| format!("0x{b:02x}")).collect();
    format!("[{}]", elems.join(", "))
}

/// Parse a byte-array literal back into a digest.
///
/// Brackets are optional, whitespace is ignored and a trailing comma is allowed.
/// Elements may be `0x`-prefixed hex or plain decimal.
pub fn parse_byte_array_literal(s: &str) -> Result<[u8; DIGEST_LEN], LiteralError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let elems: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();
    if elems.len() != DIGEST_LEN {
        return Err(LiteralError::WrongLength(elems.len()));
    }

    let mut out = [0u8; DIGEST_LEN];
    for (slot, elem) in out.iter_mut().zip(&elems) {
        *slot = parse_element(elem).ok_or_else(|| LiteralError::InvalidElement(elem.to_string()))?;
    }
    Ok(out)
}

fn parse_element(elem: &str) -> Option<u8> {
    match elem.strip_prefix("0x").or_else(|| elem.strip_prefix("0X")) {
        Some(digits) => u8::from_str_radix(digits, 16).ok(),
        None => elem.parse::<u8>().ok(),
    }
}

/// Parse a digest given either as 64 hex characters (any case) or as a byte-array literal.
pub fn parse_digest(s: &str) -> Result<[u8; DIGEST_LEN], LiteralError> {
    let trimmed = s.trim();
    if trimmed.contains(',') || trimmed.starts_with('[') {
        return parse_byte_array_literal(trimmed);
    }
    let mut out = [0u8; DIGEST_LEN];
    hex::decode_to_slice(trimmed, &mut out)?;
    Ok(out)
}
