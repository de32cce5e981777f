//! Candidate hashing one-liners for the remote interpreter.
//!
//! The remote interpreter version is unknown, so the builder emits every
//! candidate joined with `||` and lets the shell fall through to the first
//! one whose hash library imports. The candidates are algorithmically
//! identical (incremental SHA-1 over 64 KiB blocks, then the
//! `"<digest>  <path>"` line); only the library name differs.

use crate::dialect::ShellDialect;

/// Block size for the remote read loop and the local reference digest.
pub const BLOCK_SIZE: usize = 65536;

/// One hashing strategy: which library to import and how to build the
/// incremental hasher on the target interpreter.
#[derive(Debug, Clone, Copy)]
pub struct HashStrategy {
    /// Module imported on the target interpreter.
    pub library: &'static str,
    /// Expression constructing the incremental hasher.
    pub constructor: &'static str,
}

/// Candidates in preference order: `hashlib` exists on every modern Python;
/// the `sha` module covers Python 2.4 hosts.
pub const HASH_STRATEGIES: &[HashStrategy] = &[
    HashStrategy {
        library: "hashlib",
        constructor: "hashlib.sha1()",
    },
    HashStrategy {
        library: "sha",
        constructor: "sha.sha()",
    },
];

impl HashStrategy {
    /// Render the one-liner as a subshell with stderr discarded.
    ///
    /// The interpreter program is single-quoted at the shell level; the
    /// already-quoted path is spliced in by closing that quote, emitting the
    /// quoted path, and reopening it, so the interpreter sees the literal
    /// path inside its own double quotes.
    pub fn one_liner(
        &self,
        interpreter: &str,
        quoted_path: &str,
        dialect: &ShellDialect,
    ) -> String {
        format!(
            concat!(
                "{gl}{interp} -c 'import {lib}; BLOCKSIZE = {bs}; hasher = {ctor};{eol}",
                "path = \"'{path}'\"{eol}",
                "afile = open(path, \"rb\"){eol}",
                "buf = afile.read(BLOCKSIZE){eol}",
                "while len(buf) > 0:{eol}",
                "\thasher.update(buf){eol}",
                "\tbuf = afile.read(BLOCKSIZE){eol}",
                "afile.close(){eol}",
                "print(hasher.hexdigest() + \"  \" + path)' {discard}{gr}"
            ),
            gl = dialect.group_left,
            interp = interpreter,
            lib = self.library,
            bs = BLOCK_SIZE,
            ctor = self.constructor,
            eol = dialect.embedded_eol,
            path = quoted_path,
            discard = dialect.discard_stderr,
            gr = dialect.group_right,
        )
    }
}
