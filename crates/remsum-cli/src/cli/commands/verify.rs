//! Verify command: probe a path and compare against the local SHA-1.

use anyhow::{bail, Result};
use remsum_core::dialect::ShellDialect;
use remsum_core::digest;
use remsum_core::line::Outcome;
use remsum_core::probe::checksum_via_shell;
use remsum_core::shell::LocalShell;
use std::path::Path;

/// Probe `path` through the shell, compute the local reference digest, and
/// report whether they match. Mismatch or any reported precondition failure
/// is an error (nonzero exit).
pub async fn run_verify(
    shell: &LocalShell,
    path: &str,
    interpreter: &str,
    dialect: &ShellDialect,
) -> Result<()> {
    let report = checksum_via_shell(shell, path, interpreter, dialect).await?;
    let probed = match report.outcome {
        Outcome::Digest(d) => d,
        other => bail!("{}: {}", path, other),
    };
    let local = digest::sha1_path(Path::new(path))?;
    if probed != local {
        bail!("{}: digest mismatch (probed {}, local {})", path, probed, local);
    }
    println!("OK  {}  {}", probed, path);
    Ok(())
}
