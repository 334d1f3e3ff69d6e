//! Event Sink Implementations
//!
//! Concrete implementations of DeployEventSink that live in the library:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives with the CLI in `ui`.

mod json;

pub use json::JsonEventSink;
