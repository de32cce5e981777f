//! Precondition checks that run on the remote shell before any hashing.
//!
//! The checks must run before hashing because hashing a directory can
//! silently succeed on some filesystems (seen on BSD UFS), yielding a digest
//! for something that is not a regular file.
//!
//! Policy: every check in the slice runs unconditionally and assigns `rc`
//! when it trips, so the LAST tripping check determines the reported code.
//! This is deliberate, not an accident of rendering order; the integration
//! tests pin it (a directory probed with a broken interpreter reports 4,
//! not 3).

use crate::dialect::ShellDialect;

/// Sentinel value `rc` holds while no check has tripped. Non-numeric so it
/// can never collide with a real return code.
pub const RC_SENTINEL: &str = "flag";

/// Condition under which a check assigns its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripWhen {
    /// The test failing is the error (joined with `||`).
    TestFails,
    /// The test succeeding is the error (joined with `&&`).
    TestSucceeds,
}

/// One precondition check: a rendered shell test plus the code it reports.
#[derive(Debug, Clone)]
pub struct GateCheck {
    /// Shell test expression, path already quoted.
    pub test: String,
    pub trips_when: TripWhen,
    /// Application-level return code written into `rc`.
    pub code: u8,
}

impl GateCheck {
    fn render(&self, dialect: &ShellDialect) -> String {
        let join = match self.trips_when {
            TripWhen::TestFails => dialect.or_,
            TripWhen::TestSucceeds => dialect.and_,
        };
        format!("{} {} rc={}", self.test, join, self.code)
    }
}

/// The ordered check list for a checksum probe. `quoted_path` must already
/// be shell-quoted; `interpreter` is trusted and inserted verbatim.
pub fn checksum_gate(
    quoted_path: &str,
    interpreter: &str,
    dialect: &ShellDialect,
) -> Vec<GateCheck> {
    vec![
        GateCheck {
            test: format!("[ -r {} ]", quoted_path),
            trips_when: TripWhen::TestFails,
            code: 2,
        },
        GateCheck {
            test: format!("[ -f {} ]", quoted_path),
            trips_when: TripWhen::TestFails,
            code: 1,
        },
        GateCheck {
            test: format!("[ -d {} ]", quoted_path),
            trips_when: TripWhen::TestSucceeds,
            code: 3,
        },
        GateCheck {
            // Both streams discarded: Python 3 prints its -V banner to
            // stdout, which would land in front of the report line.
            test: format!("{} -V {}", interpreter, dialect.discard_all),
            trips_when: TripWhen::TestFails,
            code: 4,
        },
    ]
}

/// Render the full gate prelude: seed `rc` with the sentinel, run every
/// check, then echo `"<rc>  <path>"` and exit 0 if any check tripped.
/// Exit status stays 0 so callers read the code from stdout, never from
/// the process status.
pub fn render_prelude(
    checks: &[GateCheck],
    quoted_path: &str,
    dialect: &ShellDialect,
) -> String {
    let mut parts = Vec::with_capacity(checks.len() + 2);
    parts.push(format!("rc={}", RC_SENTINEL));
    for check in checks {
        parts.push(check.render(dialect));
    }
    parts.push(format!(
        "[ x\"$rc\" != \"x{sentinel}\" ] {and} echo \"${{rc}}  \"{path} {and} exit 0",
        sentinel = RC_SENTINEL,
        and = dialect.and_,
        path = quoted_path,
    ));
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_are_ordered_readable_regular_directory_interpreter() {
        let d = ShellDialect::sh();
        let checks = checksum_gate("'/tmp/f'", "/usr/bin/python3", &d);
        let codes: Vec<u8> = checks.iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![2, 1, 3, 4]);
    }

    #[test]
    fn directory_check_trips_on_success() {
        let d = ShellDialect::sh();
        let checks = checksum_gate("'/tmp/f'", "python3", &d);
        assert_eq!(checks[2].trips_when, TripWhen::TestSucceeds);
        assert_eq!(checks[2].render(&d), "[ -d '/tmp/f' ] && rc=3");
    }

    #[test]
    fn interpreter_check_discards_stdout_and_stderr() {
        // Python 3 writes its version banner to stdout; leaving it in place
        // would put a second line in front of the report line.
        let d = ShellDialect::sh();
        let checks = checksum_gate("'/tmp/f'", "python3", &d);
        assert_eq!(
            checks[3].render(&d),
            "python3 -V > /dev/null 2>&1 || rc=4"
        );
    }

    #[test]
    fn prelude_seeds_sentinel_and_exits_zero() {
        let d = ShellDialect::sh();
        let checks = checksum_gate("'/tmp/f'", "python3", &d);
        let prelude = render_prelude(&checks, "'/tmp/f'", &d);
        assert!(prelude.starts_with("rc=flag; "));
        assert!(prelude.contains("[ -r '/tmp/f' ] || rc=2"));
        assert!(prelude.contains("[ -f '/tmp/f' ] || rc=1"));
        assert!(prelude.contains("python3 -V > /dev/null 2>&1 || rc=4"));
        assert!(prelude
            .ends_with("[ x\"$rc\" != \"xflag\" ] && echo \"${rc}  \"'/tmp/f' && exit 0"));
    }
}
