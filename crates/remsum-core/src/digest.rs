//! Local reference digest.
//!
//! The output-line protocol carries SHA-1, so verification needs the same
//! algorithm computed locally by a trusted implementation.

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::hasher::BLOCK_SIZE;

/// Compute SHA-1 of a file and return the digest as lowercase hex.
/// Reads in the same 64 KiB blocks the remote one-liners use.
pub fn sha1_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha1::new();
    let mut buf = [0u8; BLOCK_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}
