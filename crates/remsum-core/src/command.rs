//! Assembly of the remote checksum command.
//!
//! The generated string is what a connection layer hands to the remote
//! shell verbatim. It prints exactly one line, `"<value>  <path>"` with two
//! literal spaces, where `<value>` is a SHA-1 hex digest on success, a
//! return code 1-4 for a failed precondition, or `0` when every hashing
//! strategy failed. The remote exit status is 0 on all handled paths.

use crate::dialect::ShellDialect;
use crate::gate;
use crate::hasher::HASH_STRATEGIES;
use crate::quote::sh_quote;

/// Build the checksum command for `path` using `interpreter` on the remote
/// host. Pure string construction; cannot fail for any input. `path` is
/// untrusted and gets quoted at every insertion point; `interpreter` is
/// operator-supplied and inserted verbatim.
pub fn checksum_command(path: &str, interpreter: &str, dialect: &ShellDialect) -> String {
    let quoted = sh_quote(path);

    let checks = gate::checksum_gate(&quoted, interpreter, dialect);
    let prelude = gate::render_prelude(&checks, &quoted, dialect);

    let one_liners: Vec<String> = HASH_STRATEGIES
        .iter()
        .map(|s| s.one_liner(interpreter, &quoted, dialect))
        .collect();
    let chain = one_liners.join(&format!(" {} ", dialect.or_));

    // Final fallback keeps the one-line contract even when every hashing
    // strategy failed: the caller always gets "<value>  <path>".
    format!(
        "{prelude}; {chain} {or} {gl}echo '0  '{path}{gr}",
        prelude = prelude,
        chain = chain,
        or = dialect.or_,
        gl = dialect.group_left,
        path = quoted,
        gr = dialect.group_right,
    )
}
