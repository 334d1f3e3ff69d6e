//! shipit - deployment sequencer
//!
//! Packages a backend, applies an infrastructure stack, reads its outputs,
//! builds and publishes a static frontend, and reports where it all landed.
//! Every real action is delegated to an external tool; this crate sequences
//! them, checks their exit codes and validates the values passed between them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase, DirStack, OutputReader};
pub use config::{Config, LoadedConfig};
pub use domain::entities::DeploySummary;
pub use domain::ports::{CommandRunner, DeployEvent, DeployEventSink, Invocation};
pub use domain::value_objects::{Environment, OutputFormat, Stage};
pub use error::{ShipError, ShipResult};
pub use infrastructure::{JsonEventSink, ProcessRunner, StdoutMode};
