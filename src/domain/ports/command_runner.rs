//! CommandRunner port - abstraction over external process execution
//!
//! The deploy pipeline only ever talks to tools through this trait, so it can
//! be driven by the real process runner or by a recording mock in tests.

use std::path::{Path, PathBuf};

use crate::error::ShipResult;

/// One external call: what to run, where, and what to say if it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub failure_message: String,
    /// Show a failed capture's stderr to the operator
    pub replay_stderr: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            failure_message: String::new(),
            replay_stderr: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Keep a failed capture's stderr out of the terminal; the caller
    /// reports the failure itself
    pub fn quiet_on_failure(mut self) -> Self {
        self.replay_stderr = false;
        self
    }

    /// Shell-quoted rendering for logs and error messages
    pub fn command_line(&self) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// Output of a captured invocation that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stdout: text.into(),
            stderr: String::new(),
        }
    }

    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            return self.stdout.clone();
        }
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        combined.push_str(&self.stdout);
        if !self.stdout.is_empty() && !self.stdout.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

/// Abstract process execution
///
/// Implementations:
/// - `ProcessRunner` - spawns real child processes
/// - mocks in tests that record invocations and script results
pub trait CommandRunner {
    /// Run with the parent's streams; fail with `ExecutionFailed` on non-zero exit
    fn run(&self, invocation: &Invocation) -> ShipResult<()>;

    /// Run with stdout/stderr captured; the exit status is checked before the
    /// output is handed back
    fn capture(&self, invocation: &Invocation) -> ShipResult<CapturedOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> ShipResult<()> {
        (**self).run(invocation)
    }

    fn capture(&self, invocation: &Invocation) -> ShipResult<CapturedOutput> {
        (**self).capture(invocation)
    }
}
