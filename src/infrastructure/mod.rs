//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `process/` - CommandRunner backed by child processes
//! - `events/` - Event sinks (NDJSON)
//! - `preflight` - PATH and directory checks

pub mod events;
pub mod preflight;
pub mod process;

pub use events::JsonEventSink;
pub use process::{ProcessRunner, StdoutMode};
