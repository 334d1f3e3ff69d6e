//! Common test utilities for shipit integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project tree with fake tools on PATH
//! - Fixtures: the fake tool scripts and sample configs

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
