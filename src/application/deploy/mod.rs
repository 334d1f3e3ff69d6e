//! Deploy Module
//!
//! Orchestrates a deploy run.
//!
//! ## Structure
//!
//! - `dir_stack` - Scoped working directories (`DirStack`, `DirGuard`)
//! - `options` - Run configuration (`DeployOptions`)
//! - `use_case` - Stage sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use shipit::application::deploy::{DeployOptions, DeployUseCase, DirStack};
//!
//! let mut dirs = DirStack::new(project_root);
//! let summary = DeployUseCase::new(ProcessRunner::new())
//!     .execute(&DeployOptions::new(Environment::Test), &mut dirs)?;
//! ```

mod dir_stack;
mod options;
mod use_case;

pub use dir_stack::{DirGuard, DirStack};
pub use options::DeployOptions;
pub use use_case::{DeployUseCase, StackOutputs, API_URL_ENV_KEY};
