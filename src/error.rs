//! Error types for shipit
//!
//! Library code returns `ShipError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shipit operations
pub type ShipResult<T> = Result<T, ShipError>;

/// Main error type for shipit operations
#[derive(Error, Debug)]
pub enum ShipError {
    /// An external command exited unsuccessfully
    #[error("{message}: `{command}` {}", describe_code(*code))]
    ExecutionFailed {
        message: String,
        command: String,
        code: Option<i32>,
    },

    /// A required provisioning output came back empty
    #[error("output '{name}' is empty")]
    MissingOutput { name: String },

    /// A provisioning output was not a usable value
    #[error("output '{name}' is not a usable value: {value}")]
    InvalidOutput { name: String, value: String },

    /// Program could not be found on PATH
    #[error("'{program}' was not found on PATH")]
    ToolNotFound { program: String },

    /// Program exists but could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A stage directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Environment name is not one of the known environments
    #[error("unknown environment '{value}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownEnvironment {
        value: String,
        suggestion: Option<String>,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShipError {
    /// Process exit code for this failure.
    ///
    /// A failed external command propagates its own code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShipError::ExecutionFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
