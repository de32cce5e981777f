//! Local command: compute SHA-1 of a file without going through a shell.

use anyhow::Result;
use remsum_core::digest;
use std::path::Path;

/// Compute and print SHA-1 of the given file, in the wire line format.
pub fn run_local(path: &Path) -> Result<()> {
    let digest = digest::sha1_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
