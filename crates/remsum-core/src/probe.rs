//! Build, run, and parse a checksum probe in one call.

use anyhow::{bail, Result};

use crate::command::checksum_command;
use crate::dialect::ShellDialect;
use crate::line::{self, ChecksumReport};
use crate::shell::LocalShell;

/// Synthesize the checksum command for `path`, run it through `shell`, and
/// parse the reported line. Errors cover only spawn failures, hard shell
/// faults, and unparseable output; precondition failures (rc 1-4) come back
/// as data in the report.
pub async fn checksum_via_shell(
    shell: &LocalShell,
    path: &str,
    interpreter: &str,
    dialect: &ShellDialect,
) -> Result<ChecksumReport> {
    let cmd = checksum_command(path, interpreter, dialect);
    tracing::debug!(path, interpreter, "running checksum command");
    tracing::trace!(command = %cmd);

    let out = shell.run(&cmd).await?;
    if !out.success() {
        // Handled failures exit 0; a nonzero status means the shell itself
        // rejected the command.
        bail!(
            "shell exited with status {}: {}",
            out.exit_code,
            out.stderr.trim()
        );
    }
    // Parse the last non-empty line: the report is always printed last,
    // even if the remote interpreter leaked a banner before it.
    Ok(line::parse_line(out.last_line())?)
}
