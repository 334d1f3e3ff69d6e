//! Process Runner
//!
//! Implements the CommandRunner port with `std::process`.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::ports::{CapturedOutput, CommandRunner, Invocation};
use crate::error::{ShipError, ShipResult};

/// Where a child's stdout goes when it is not captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdoutMode {
    /// Child writes straight to our stdout
    #[default]
    Inherit,
    /// Child stdout is sent to our stderr, keeping stdout for NDJSON events
    ToStderr,
}

/// Runs invocations as real child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    stdout_mode: StdoutMode,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout_mode(mut self, mode: StdoutMode) -> Self {
        self.stdout_mode = mode;
        self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);
        cmd
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> ShipResult<()> {
        tracing::debug!(
            command = %invocation.command_line(),
            cwd = %invocation.cwd.display(),
            "running"
        );

        let mut cmd = Self::command(invocation);
        cmd.stdin(Stdio::inherit()).stderr(Stdio::inherit());
        match self.stdout_mode {
            StdoutMode::Inherit => cmd.stdout(Stdio::inherit()),
            StdoutMode::ToStderr => cmd.stdout(Stdio::from(std::io::stderr())),
        };

        let status = cmd
            .status()
            .map_err(|e| spawn_error(&invocation.program, e))?;

        check_status(invocation, status)
    }

    fn capture(&self, invocation: &Invocation) -> ShipResult<CapturedOutput> {
        tracing::debug!(
            command = %invocation.command_line(),
            cwd = %invocation.cwd.display(),
            "capturing"
        );

        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(&invocation.program, e))?;

        if !output.status.success() {
            if invocation.replay_stderr {
                // The operator never saw this output; replay the diagnostics
                let mut stderr = std::io::stderr().lock();
                let _ = stderr.write_all(&output.stderr);
                let _ = stderr.flush();
            } else {
                tracing::debug!(
                    command = %invocation.command_line(),
                    stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                    "quiet capture failed"
                );
            }
        }
        check_status(invocation, output.status)?;

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn check_status(invocation: &Invocation, status: ExitStatus) -> ShipResult<()> {
    if status.success() {
        return Ok(());
    }

    tracing::debug!(
        command = %invocation.command_line(),
        code = ?status.code(),
        "command failed"
    );
    Err(ShipError::ExecutionFailed {
        message: invocation.failure_message.clone(),
        command: invocation.command_line(),
        code: status.code(),
    })
}

fn spawn_error(program: &str, err: std::io::Error) -> ShipError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ShipError::ToolNotFound {
            program: program.to_string(),
        }
    } else {
        ShipError::Spawn {
            program: program.to_string(),
            source: err,
        }
    }
}
