//! Test script execution
//!
//! Runs one script command line through the shell and captures its outcome.
//! A non-zero exit is a normal result here, never an error; only a failure
//! to spawn the shell itself surfaces as `Err`.

use std::process::{Command, Stdio};

/// Exit code used when a script cannot be executed at all
///
/// Covers missing or non-executable scripts and shell spawn failures, and is
/// cached like a real exit code.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Captured outcome of one script invocation
#[derive(Debug)]
pub struct ScriptOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ScriptOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a command line with `sh -c`, blocking until it terminates
///
/// There is no timeout: a hung script hangs the whole run. A process killed
/// by a signal reports the failure sentinel since it has no exit code.
pub fn run_shell(command_line: &str) -> std::io::Result<ScriptOutcome> {
    tracing::debug!("running: {}", command_line);

    let output = Command::new("sh")
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::null())
        .output()?;

    Ok(ScriptOutcome {
        exit_code: output.status.code().unwrap_or(FAILURE_EXIT_CODE),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        let outcome = run_shell("exit 0").unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn test_non_zero_exit_is_captured_not_raised() {
        let outcome = run_shell("exit 3").unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, 3);
    }

    #[test]
    fn test_output_streams_are_captured() {
        let outcome = run_shell("echo out; echo err >&2").unwrap();
        assert_eq!(outcome.stdout, "out\n");
        assert_eq!(outcome.stderr, "err\n");
    }
}
