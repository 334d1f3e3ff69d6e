//! Output Reader
//!
//! Queries the provisioning tool for one named output and validates the answer.

use std::path::Path;

use crate::domain::ports::{CommandRunner, Invocation};
use crate::domain::services::{validate, OutputValue};
use crate::domain::value_objects::OutputFormat;
use crate::error::ShipResult;

/// Reads provisioning outputs through a `CommandRunner`
pub struct OutputReader<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
    format: OutputFormat,
}

impl<'a, R: CommandRunner> OutputReader<'a, R> {
    pub fn new(runner: &'a R, program: &'a str, format: OutputFormat) -> Self {
        Self {
            runner,
            program,
            format,
        }
    }

    /// The query for `name`, run in `cwd`
    pub fn invocation(&self, cwd: &Path, name: &str) -> Invocation {
        Invocation::new(self.program, cwd)
            .args(["output", "-no-color", self.format.flag(), name])
            .failure_message(format!("Failed to read output '{name}'"))
    }

    /// Read `name` from the stack in `cwd`.
    ///
    /// A failing query is reported before its output is looked at. Raw
    /// answers are judged on stdout and stderr together, since that is where
    /// the tool's warnings land. Outputs that may be empty are optional, so a
    /// failed query for one does not echo the tool's diagnostics.
    pub fn read(&self, cwd: &Path, name: &str, allow_empty: bool) -> ShipResult<OutputValue> {
        let mut invocation = self.invocation(cwd, name);
        if allow_empty {
            invocation = invocation.quiet_on_failure();
        }
        let captured = self.runner.capture(&invocation)?;
        let text = match self.format {
            OutputFormat::Json => captured.stdout,
            OutputFormat::Raw => captured.combined(),
        };
        let value = validate(self.format, name, &text, allow_empty)?;
        tracing::debug!(output = name, value = %value.value, "read provisioning output");
        Ok(value)
    }
}
