//! Property tests for shipit.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "strips only what it must".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/workspace.rs"]
mod workspace;

#[path = "properties/output.rs"]
mod output;
