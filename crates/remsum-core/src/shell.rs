//! Local shell runner.
//!
//! remsum carries no transport of its own; a connection layer is expected to
//! deliver generated commands to the remote shell. `LocalShell` is the local
//! stand-in for that collaborator, used by the CLI probe/verify commands and
//! the integration tests.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;

/// Captured result of one shell invocation.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// Process exit code (-1 when terminated by a signal).
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Last non-empty stdout line, or empty string when there was none.
    /// The report line is always the final thing the generated command
    /// prints; anything before it (an interpreter banner that slipped past
    /// a redirect) is noise.
    pub fn last_line(&self) -> &str {
        self.stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("")
    }
}

/// Runs command strings through `<shell> -c`.
#[derive(Debug, Clone)]
pub struct LocalShell {
    shell: PathBuf,
}

impl LocalShell {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// The default POSIX shell.
    pub fn sh() -> Self {
        Self::new("sh")
    }

    pub fn shell_path(&self) -> &std::path::Path {
        &self.shell
    }

    /// Execute `cmd` and capture its output. An error here means the shell
    /// itself could not be spawned; a nonzero exit is reported as data.
    pub async fn run(&self, cmd: &str) -> Result<ShellOutput> {
        let out = Command::new(&self.shell)
            .arg("-c")
            .arg(cmd)
            .output()
            .await
            .with_context(|| format!("spawn {}", self.shell.display()))?;
        Ok(ShellOutput {
            exit_code: out.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}
