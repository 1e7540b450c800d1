//! Synchronous subprocess execution with captured output.
//!
//! Every external call in prsafe goes through [`run_command`]: run to
//! completion, capture stdout/stderr as text, and normalize failure into a
//! typed [`CommandError`]. Retry policy belongs to callers; nothing here
//! retries.

use std::process::Command;

use thiserror::Error;
use tracing::{debug, error};

/// Captured output of a successful invocation. Callers own interpretation of
/// `stdout` (JSON field extraction, plain text, ...).
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Normalized failure for one external invocation.
///
/// `code` is `None` when the process could not be spawned (or was killed by a
/// signal); `argv` is carried verbatim for diagnostics.
#[derive(Debug, Error)]
#[error("command failed ({}): {argv}\n{stderr}", code_label(.code))]
pub struct CommandError {
    pub code: Option<i32>,
    pub argv: String,
    pub stderr: String,
}

fn code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "no exit code".to_string(),
    }
}

/// Run an external command to completion, capturing stdout and stderr.
///
/// Non-zero exit becomes a [`CommandError`] carrying the exit code, the full
/// argv, and trimmed stderr; callers decide whether that is fatal.
pub fn run_command(mut cmd: Command) -> Result<CommandOutput, CommandError> {
    let argv = render_argv(&cmd);
    debug!(argv = %argv, "running command");

    let output = match cmd.output() {
        Ok(output) => output,
        Err(err) => {
            error!(argv = %argv, err = %err, "failed to spawn command");
            return Err(CommandError {
                code: None,
                argv,
                stderr: err.to_string(),
            });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() {
        return Err(CommandError {
            code: output.status.code(),
            argv,
            stderr: stderr.trim().to_string(),
        });
    }

    debug!(argv = %argv, stdout_bytes = stdout.len(), "command finished");
    Ok(CommandOutput { stdout, stderr })
}

fn render_argv(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
