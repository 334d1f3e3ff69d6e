//! Deploy Event Port
//!
//! Observable interface for deploy runs. Drives the console progress view,
//! the NDJSON event stream, and test assertions.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::DeploySummary;
use crate::domain::services::WorkspaceAction;
use crate::domain::value_objects::{Environment, Stage};

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeployEvent {
    /// Run started
    Started {
        environment: Environment,
        project: String,
        root: PathBuf,
    },

    /// Stage started
    StageStarted { stage: Stage },

    /// External command about to run
    CommandStarted {
        stage: Stage,
        command_line: String,
        cwd: PathBuf,
    },

    /// Workspace selected or created
    WorkspaceResolved { action: WorkspaceAction },

    /// Provisioning output read
    OutputRead { name: String, value: String },

    /// Optional output could not be read and was treated as empty
    OutputFallback { name: String, reason: String },

    /// Build-time environment file written
    EnvFileWritten { path: PathBuf, key: String },

    /// Stage finished successfully
    StageCompleted { stage: Stage, elapsed_ms: u64 },

    /// Run finished successfully
    Completed { summary: DeploySummary },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress display in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Whether this sink wants per-command events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
