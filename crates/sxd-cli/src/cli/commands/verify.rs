//! `sxd verify <text> <digest>` – check a string against an embedded digest.

use anyhow::{bail, Context, Result};
use sxd_core::checksum;

pub fn run_verify(text: &str, digest: &str) -> Result<()> {
    let expected = checksum::parse_digest(digest).context("parse expected digest")?;
    let actual = checksum::sha256(text.as_bytes());
    if actual == expected {
        println!("OK  {}", hex::encode(actual));
        Ok(())
    } else {
        println!("MISMATCH");
        println!("  expected: {}", hex::encode(expected));
        println!("  actual:   {}", hex::encode(actual));
        bail!("digest mismatch for {text:?}");
    }
}
