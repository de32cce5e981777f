//! Probe command: run the synthesized command through the local shell.

use anyhow::Result;
use remsum_core::dialect::ShellDialect;
use remsum_core::probe::checksum_via_shell;
use remsum_core::shell::LocalShell;

/// Run the checksum command locally and print the parsed report.
/// Precondition failures are data, not errors; the process still exits 0.
pub async fn run_probe(
    shell: &LocalShell,
    path: &str,
    interpreter: &str,
    dialect: &ShellDialect,
) -> Result<()> {
    let report = checksum_via_shell(shell, path, interpreter, dialect).await?;
    println!("{}", report);
    Ok(())
}
