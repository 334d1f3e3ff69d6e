//! Configuration module for shipit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHIPIT_*)
//! 3. Project config (shipit.toml, or --config)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator};
pub use loader::{discover, with_env_overrides_from, LoadedConfig, CONFIG_FILE_NAME};
pub use types::{
    BackendConfig, Config, FrontendConfig, OutputsConfig, PathsConfig, ProjectConfig,
    ProvisionConfig, StorageConfig, DEFAULT_PROJECT_NAME,
};
