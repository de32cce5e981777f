//! POSIX shell quoting for untrusted strings.
//!
//! Paths handed to the command builder come from callers we do not control,
//! so every insertion point wraps them with `sh_quote` first. The quoted
//! form must parse as a single token on any sh-family shell.

/// Quote `s` so a POSIX shell reads it as one literal token.
///
/// Strings made only of clearly safe bytes pass through unchanged. Anything
/// else is single-quoted, with embedded single quotes rewritten as `'"'"'`
/// (close quote, double-quoted quote, reopen). Empty input becomes `''`.
pub fn sh_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.bytes().all(|b| {
        matches!(b,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'_' | b'-' | b'.' | b'/' | b':' | b'@' | b'%'
        )
    }) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}
