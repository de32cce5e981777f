//! Connective tokens for the portable sh shell family.
//!
//! Generated commands may only use constructs valid across every shell in
//! `COMPATIBLE_SHELLS`: no `[[`, no arrays, no process substitution. The
//! dialect struct keeps the splice tokens in one place so the builder never
//! hard-codes them.

/// Shell basenames the generated commands are known to parse on.
/// sh is the default target, so commands may also end up on shells not
/// listed here; the builder still emits only lowest-common-denominator text.
pub const COMPATIBLE_SHELLS: &[&str] = &["sh", "zsh", "bash", "dash", "ksh"];

/// Tokens spliced between command fragments.
#[derive(Debug, Clone)]
pub struct ShellDialect {
    /// Logical AND between commands.
    pub and_: &'static str,
    /// Logical OR between commands.
    pub or_: &'static str,
    /// Discard stderr of the preceding command.
    pub discard_stderr: &'static str,
    /// Discard both stdout and stderr of the preceding command.
    pub discard_all: &'static str,
    /// Open a subshell group.
    pub group_left: &'static str,
    /// Close a subshell group.
    pub group_right: &'static str,
    /// Line terminator inside an embedded interpreter one-liner.
    pub embedded_eol: &'static str,
}

impl ShellDialect {
    /// The portable sh-family dialect.
    pub fn sh() -> Self {
        Self {
            and_: "&&",
            or_: "||",
            discard_stderr: "2>/dev/null",
            discard_all: "> /dev/null 2>&1",
            group_left: "(",
            group_right: ")",
            embedded_eol: "\n",
        }
    }

    /// Whether a shell binary name (basename, extension stripped) belongs to
    /// the sh family this dialect targets.
    pub fn is_compatible(shell: &str) -> bool {
        let base = shell.rsplit('/').next().unwrap_or(shell);
        let base = base.split('.').next().unwrap_or(base);
        COMPATIBLE_SHELLS.contains(&base)
    }
}

impl Default for ShellDialect {
    fn default() -> Self {
        Self::sh()
    }
}
