//! CLI for the remsum checksum command synthesizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remsum_core::config;
use remsum_core::dialect::ShellDialect;
use remsum_core::shell::LocalShell;

use commands::{run_emit, run_local, run_probe, run_verify};

/// Top-level CLI for the remsum checksum command synthesizer.
#[derive(Debug, Parser)]
#[command(name = "remsum")]
#[command(about = "remsum: POSIX shell checksum commands for remote files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the synthesized checksum command for a path.
    Emit {
        /// Remote path to checksum (quoted safely, may contain anything).
        path: String,

        /// Remote interpreter for the hashing one-liners (default from config).
        #[arg(long)]
        interpreter: Option<String>,
    },

    /// Run the synthesized command through the local shell and print the result.
    Probe {
        /// Path to checksum.
        path: String,

        /// Interpreter for the hashing one-liners (default from config).
        #[arg(long)]
        interpreter: Option<String>,

        /// Shell to run the command through (default from config).
        #[arg(long)]
        shell: Option<String>,
    },

    /// Probe a path and compare the reported digest against a local SHA-1.
    Verify {
        /// Path to verify.
        path: String,

        /// Interpreter for the hashing one-liners (default from config).
        #[arg(long)]
        interpreter: Option<String>,

        /// Shell to run the command through (default from config).
        #[arg(long)]
        shell: Option<String>,
    },

    /// Compute SHA-1 of a local file directly (no shell involved).
    Local {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let dialect = ShellDialect::sh();

        match cli.command {
            CliCommand::Emit { path, interpreter } => {
                let interpreter = interpreter.unwrap_or_else(|| cfg.interpreter.clone());
                run_emit(&path, &interpreter, &dialect);
            }
            CliCommand::Probe {
                path,
                interpreter,
                shell,
            } => {
                let interpreter = interpreter.unwrap_or_else(|| cfg.interpreter.clone());
                let shell = resolve_shell(shell, &cfg);
                run_probe(&shell, &path, &interpreter, &dialect).await?;
            }
            CliCommand::Verify {
                path,
                interpreter,
                shell,
            } => {
                let interpreter = interpreter.unwrap_or_else(|| cfg.interpreter.clone());
                let shell = resolve_shell(shell, &cfg);
                run_verify(&shell, &path, &interpreter, &dialect).await?;
            }
            CliCommand::Local { path } => run_local(std::path::Path::new(&path))?,
        }

        Ok(())
    }
}

fn resolve_shell(flag: Option<String>, cfg: &config::RemsumConfig) -> LocalShell {
    let name = flag.unwrap_or_else(|| cfg.shell.clone());
    if !ShellDialect::is_compatible(&name) {
        tracing::warn!(
            shell = %name,
            "shell is outside the sh family; generated commands may not parse"
        );
    }
    LocalShell::new(name)
}

#[cfg(test)]
mod tests;
