//! Emit command: print the synthesized checksum command string.

use remsum_core::command::checksum_command;
use remsum_core::dialect::ShellDialect;

/// Print the command a connection layer would send to the remote shell.
pub fn run_emit(path: &str, interpreter: &str, dialect: &ShellDialect) {
    println!("{}", checksum_command(path, interpreter, dialect));
}
