//! Parsing of the remote output line.
//!
//! The remote command reports everything through a single printed line and
//! always exits 0 on handled paths, so this parser is the only way callers
//! learn what happened. `0` stays the shared "unknown error" value for
//! line-protocol compatibility; in-process it maps to its own variant.

use std::fmt;
use thiserror::Error;

/// What the remote checksum run reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lowercase SHA-1 hex digest of the file contents.
    Digest(String),
    /// rc 1: not a regular file (covers nonexistent paths).
    NotRegularFile,
    /// rc 2: not readable by the acting user.
    NotReadable,
    /// rc 3: path is a directory.
    IsDirectory,
    /// rc 4: no usable interpreter at the given path.
    NoInterpreter,
    /// rc 0: hashing was attempted but no strategy produced a digest.
    Unknown,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Digest(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Digest(d) => write!(f, "{}", d),
            Outcome::NotRegularFile => write!(f, "not a regular file"),
            Outcome::NotReadable => write!(f, "no read permission"),
            Outcome::IsDirectory => write!(f, "is a directory"),
            Outcome::NoInterpreter => write!(f, "no usable interpreter"),
            Outcome::Unknown => write!(f, "unknown error"),
        }
    }
}

/// Parsed `"<value>  <path>"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumReport {
    pub outcome: Outcome,
    /// Path echoed back by the remote command.
    pub path: String,
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Digest(d) => write!(f, "{}  {}", d, self.path),
            other => write!(f, "{}: {}", self.path, other),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLineError {
    #[error("empty checksum output")]
    Empty,
    #[error("malformed checksum line (no two-space separator): {0:?}")]
    Malformed(String),
    #[error("unrecognized status value {value:?} in line {line:?}")]
    UnknownValue { value: String, line: String },
}

fn is_sha1_hex(s: &str) -> bool {
    s.len() == 40 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Parse one remote output line. The value field never contains spaces, so
/// the first two-space run separates value from path (paths may themselves
/// contain double spaces).
pub fn parse_line(line: &str) -> Result<ChecksumReport, ParseLineError> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if line.is_empty() {
        return Err(ParseLineError::Empty);
    }
    let (value, path) = line
        .split_once("  ")
        .ok_or_else(|| ParseLineError::Malformed(line.to_string()))?;

    let outcome = if is_sha1_hex(value) {
        Outcome::Digest(value.to_string())
    } else {
        match value {
            "0" => Outcome::Unknown,
            "1" => Outcome::NotRegularFile,
            "2" => Outcome::NotReadable,
            "3" => Outcome::IsDirectory,
            "4" => Outcome::NoInterpreter,
            other => {
                return Err(ParseLineError::UnknownValue {
                    value: other.to_string(),
                    line: line.to_string(),
                })
            }
        }
    };

    Ok(ChecksumReport {
        outcome,
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn digest_line_parses() {
        let report = parse_line(&format!("{}  /tmp/f", DIGEST)).unwrap();
        assert_eq!(report.outcome, Outcome::Digest(DIGEST.to_string()));
        assert_eq!(report.path, "/tmp/f");
        assert!(report.outcome.is_success());
    }

    #[test]
    fn all_return_codes_map() {
        let cases = [
            ("0", Outcome::Unknown),
            ("1", Outcome::NotRegularFile),
            ("2", Outcome::NotReadable),
            ("3", Outcome::IsDirectory),
            ("4", Outcome::NoInterpreter),
        ];
        for (value, expected) in cases {
            let report = parse_line(&format!("{}  /x", value)).unwrap();
            assert_eq!(report.outcome, expected, "value {}", value);
            assert!(!report.outcome.is_success());
        }
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let report = parse_line("3  /tmp/dir\n").unwrap();
        assert_eq!(report.outcome, Outcome::IsDirectory);
    }

    #[test]
    fn path_with_double_spaces_survives() {
        let report = parse_line("1  /tmp/odd  name").unwrap();
        assert_eq!(report.path, "/tmp/odd  name");
    }

    #[test]
    fn empty_line_is_an_error() {
        assert_eq!(parse_line(""), Err(ParseLineError::Empty));
        assert_eq!(parse_line("\n"), Err(ParseLineError::Empty));
    }

    #[test]
    fn missing_separator_is_malformed() {
        assert!(matches!(
            parse_line("deadbeef /tmp/f"),
            Err(ParseLineError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            parse_line("7  /tmp/f"),
            Err(ParseLineError::UnknownValue { .. })
        ));
    }

    #[test]
    fn uppercase_hex_is_not_a_digest() {
        let upper = DIGEST.to_uppercase();
        assert!(matches!(
            parse_line(&format!("{}  /tmp/f", upper)),
            Err(ParseLineError::UnknownValue { .. })
        ));
    }
}
