//! Subprocess execution with captured output and an optional deadline.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{BottleError, Result};

/// Poll interval while waiting on a child with a deadline.
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Deadline (None = wait until the child exits).
    pub timeout: Option<Duration>,
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal or by the deadline).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it exceeded the deadline.
    pub timed_out: bool,
}

impl CommandOutput {
    /// Combined diagnostic text, stderr first (it usually carries the reason).
    pub fn diagnostics(&self) -> String {
        let mut text = String::new();
        for chunk in [&self.stderr, &self.stdout] {
            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
            }
        }
        text
    }
}

/// Execute a program with arguments, capturing output.
///
/// Spawn failure is the only error path; a nonzero exit or an expired
/// deadline is a normal `CommandOutput` with `success == false`.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|_| BottleError::CommandFailed {
        command: format_command(program, args),
        code: None,
    })?;

    // Reader threads drain the pipes so the child can't block on a full
    // buffer while we wait on it.
    let stdout_handle = child.stdout.take().map(|out| {
        thread::spawn(move || {
            let mut buf = String::new();
            for line in BufReader::new(out).lines().map_while(std::result::Result::ok) {
                buf.push_str(&line);
                buf.push('\n');
            }
            buf
        })
    });
    let stderr_handle = child.stderr.take().map(|err| {
        thread::spawn(move || {
            let mut buf = String::new();
            for line in BufReader::new(err).lines().map_while(std::result::Result::ok) {
                buf.push_str(&line);
                buf.push('\n');
            }
            buf
        })
    });

    let deadline = options.timeout.map(|t| start + t);
    let mut timed_out = false;

    let status = loop {
        match child.try_wait()? {
            Some(status) => break Some(status),
            None => {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    // Killing closes the pipes, which unblocks the readers.
                    let _ = child.kill();
                    let _ = child.wait();
                    timed_out = true;
                    break None;
                }
                thread::sleep(WAIT_POLL);
            }
        }
    };

    let stdout = stdout_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();
    let stderr = stderr_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();

    let exit_code = status.and_then(|s| s.code());
    let success = status.is_some_and(|s| s.success());

    Ok(CommandOutput {
        exit_code,
        stdout,
        stderr,
        duration: start.elapsed(),
        success,
        timed_out,
    })
}

/// Execute a program in a working directory with no deadline.
pub fn execute_in(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    execute(
        program,
        args,
        &CommandOptions {
            cwd: Some(cwd.to_path_buf()),
            timeout: None,
        },
    )
}

fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_command_captures_stdout() {
        let result = execute("echo", &["hello"], &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
        assert!(!result.timed_out);
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_not_an_error() {
        let result = execute("sh", &["-c", "echo oops >&2; exit 3"], &CommandOptions::default())
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let result = execute(
            "this-command-does-not-exist-12345",
            &[],
            &CommandOptions::default(),
        );
        assert!(matches!(result, Err(BottleError::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn deadline_kills_long_running_command() {
        let options = CommandOptions {
            cwd: None,
            timeout: Some(Duration::from_millis(100)),
        };
        let result = execute("sleep", &["5"], &options).unwrap();

        assert!(!result.success);
        assert!(result.timed_out);
        assert_eq!(result.exit_code, None);
        assert!(result.duration < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn execute_in_sets_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = execute_in("pwd", &[], temp.path()).unwrap();

        assert!(result.success);
        // Compare canonicalized: macOS tempdirs live behind /private symlinks.
        let reported = std::path::PathBuf::from(result.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn diagnostics_prefers_stderr() {
        let result = execute(
            "sh",
            &["-c", "echo out; echo err >&2; exit 1"],
            &CommandOptions::default(),
        )
        .unwrap();

        let diag = result.diagnostics();
        let err_pos = diag.find("err").unwrap();
        let out_pos = diag.find("out").unwrap();
        assert!(err_pos < out_pos);
    }

    #[cfg(unix)]
    #[test]
    fn diagnostics_empty_when_silent() {
        let result = execute("true", &[], &CommandOptions::default()).unwrap();
        assert!(result.diagnostics().is_empty());
    }
}
