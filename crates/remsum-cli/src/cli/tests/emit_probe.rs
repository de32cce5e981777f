//! Tests for emit and probe argument parsing.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_emit() {
    match parse(&["remsum", "emit", "/etc/hosts"]) {
        CliCommand::Emit { path, interpreter } => {
            assert_eq!(path, "/etc/hosts");
            assert!(interpreter.is_none());
        }
        _ => panic!("expected Emit"),
    }
}

#[test]
fn cli_parse_emit_with_interpreter() {
    match parse(&[
        "remsum",
        "emit",
        "/etc/hosts",
        "--interpreter",
        "/usr/bin/python2",
    ]) {
        CliCommand::Emit { path, interpreter } => {
            assert_eq!(path, "/etc/hosts");
            assert_eq!(interpreter.as_deref(), Some("/usr/bin/python2"));
        }
        _ => panic!("expected Emit with --interpreter"),
    }
}

#[test]
fn cli_parse_emit_metacharacter_path() {
    match parse(&["remsum", "emit", "a'b\"c $(x)"]) {
        CliCommand::Emit { path, .. } => assert_eq!(path, "a'b\"c $(x)"),
        _ => panic!("expected Emit"),
    }
}

#[test]
fn cli_parse_probe() {
    match parse(&["remsum", "probe", "/tmp/file.bin"]) {
        CliCommand::Probe {
            path,
            interpreter,
            shell,
        } => {
            assert_eq!(path, "/tmp/file.bin");
            assert!(interpreter.is_none());
            assert!(shell.is_none());
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_with_shell_and_interpreter() {
    match parse(&[
        "remsum",
        "probe",
        "/tmp/file.bin",
        "--shell",
        "dash",
        "--interpreter",
        "python3",
    ]) {
        CliCommand::Probe {
            path,
            interpreter,
            shell,
        } => {
            assert_eq!(path, "/tmp/file.bin");
            assert_eq!(interpreter.as_deref(), Some("python3"));
            assert_eq!(shell.as_deref(), Some("dash"));
        }
        _ => panic!("expected Probe with flags"),
    }
}
