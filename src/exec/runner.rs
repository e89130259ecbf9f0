// src/exec/runner.rs
// =============================================================================
// Spawns the child process and waits for it.
//
// Direct invocation passes the argument vector to the OS as-is, so an argument
// with spaces (or ; or $) stays one argument and is never interpreted by a
// shell. Shell invocation exists for callers that depend on the old
// "join everything with spaces and run it" behaviour; it does no quoting.
// =============================================================================

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use super::{ExecOutcome, Invocation, OutputMode};
use crate::error::MapperError;

// Runs `args` as a command and waits for it to finish
//
// Parameters:
//   args: program followed by its arguments (must not be empty)
//   invocation: direct or through the shell
//   output: capture stdout or let it through
//
// Returns: Captured(stdout) or Exited on success. A command that can't be
// started, exits non-zero, or dies from a signal is a SubprocessFailure.
pub async fn run_command(
    args: &[String],
    invocation: Invocation,
    output: OutputMode,
) -> Result<ExecOutcome, MapperError> {
    let (program, rest) = args
        .split_first()
        .ok_or(MapperError::MissingArgument("command"))?;

    let command_line = args.join(" ");
    let mut command = match invocation {
        Invocation::Direct => {
            let mut command = Command::new(program);
            command.args(rest);
            command
        }
        Invocation::Shell => shell_command(&command_line),
    };
    command.stdin(Stdio::inherit()).stderr(Stdio::inherit());

    tracing::info!(command = %command_line, ?invocation, ?output, "running command");

    match output {
        OutputMode::Capture => {
            let child_output = command
                .stdout(Stdio::piped())
                .output()
                .await
                .map_err(|e| spawn_failure(&command_line, &e))?;

            check_status(&command_line, child_output.status)?;

            tracing::debug!(bytes = child_output.stdout.len(), "captured stdout");
            Ok(ExecOutcome::Captured(
                String::from_utf8_lossy(&child_output.stdout).into_owned(),
            ))
        }
        OutputMode::Inherit => {
            let status = command
                .stdout(Stdio::inherit())
                .status()
                .await
                .map_err(|e| spawn_failure(&command_line, &e))?;

            check_status(&command_line, status)?;
            Ok(ExecOutcome::Exited)
        }
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

fn spawn_failure(command_line: &str, error: &std::io::Error) -> MapperError {
    MapperError::SubprocessFailure {
        command: command_line.to_string(),
        code: None,
        reason: format!("could not start: {error}"),
    }
}

fn check_status(command_line: &str, status: ExitStatus) -> Result<(), MapperError> {
    if status.success() {
        return Ok(());
    }

    let code = status.code();
    let reason = match code {
        Some(code) => format!("exited with code {code}"),
        None => "terminated by a signal".to_string(),
    };
    tracing::debug!(command = command_line, ?code, "command failed");

    Err(MapperError::SubprocessFailure {
        command: command_line.to_string(),
        code,
        reason,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_command_is_missing_argument() {
        let err = run_command(&[], Invocation::Direct, OutputMode::Capture)
            .await
            .unwrap_err();
        assert!(matches!(err, MapperError::MissingArgument("command")));
    }

    #[tokio::test]
    async fn test_capture_returns_stdout() {
        let outcome = run_command(&args(&["echo", "hello"]), Invocation::Direct, OutputMode::Capture)
            .await
            .unwrap();
        assert_eq!(outcome, ExecOutcome::Captured("hello\n".to_string()));
    }

    #[tokio::test]
    async fn test_direct_keeps_arguments_with_spaces() {
        let outcome = run_command(
            &args(&["printf", "%s,", "a b"]),
            Invocation::Direct,
            OutputMode::Capture,
        )
        .await
        .unwrap();
        assert_eq!(outcome, ExecOutcome::Captured("a b,".to_string()));
    }

    #[tokio::test]
    async fn test_shell_splits_joined_arguments() {
        let outcome = run_command(
            &args(&["printf", "%s,", "a b"]),
            Invocation::Shell,
            OutputMode::Capture,
        )
        .await
        .unwrap();
        assert_eq!(outcome, ExecOutcome::Captured("a,b,".to_string()));
    }

    #[tokio::test]
    async fn test_non_zero_exit_reports_code() {
        let err = run_command(&args(&["sh", "-c", "exit 3"]), Invocation::Direct, OutputMode::Capture)
            .await
            .unwrap_err();

        match err {
            MapperError::SubprocessFailure { code, reason, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(reason, "exited with code 3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_shell_exit_code_in_inherit_mode() {
        let err = run_command(&args(&["exit", "4"]), Invocation::Shell, OutputMode::Inherit)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[tokio::test]
    async fn test_unknown_program_cannot_start() {
        let err = run_command(
            &args(&["page-mapper-test-no-such-program"]),
            Invocation::Direct,
            OutputMode::Capture,
        )
        .await
        .unwrap_err();

        match err {
            MapperError::SubprocessFailure { code, reason, .. } => {
                assert_eq!(code, None);
                assert!(reason.starts_with("could not start"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_inherit_success() {
        let outcome = run_command(&args(&["true"]), Invocation::Direct, OutputMode::Inherit)
            .await
            .unwrap();
        assert_eq!(outcome, ExecOutcome::Exited);
    }
}
