//! Command implementations
//!
//! Both commands share how a run is resolved: config file, `SHIPIT_*`
//! variables, then CLI flags on top.

pub mod check;
pub mod deploy;

use std::path::{Path, PathBuf};

use anyhow::Result;
use shipit::config::{self, Config, DEFAULT_PROJECT_NAME};
use shipit::Environment;

use crate::cli::Cli;

/// Everything a command needs after flags, env and config are merged
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: Config,
    pub environment: Environment,
    pub project_name: String,
    /// Directory stage paths are resolved against
    pub base_dir: PathBuf,
}

impl RunContext {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_in(cli, &cwd)
    }

    fn resolve_in(cli: &Cli, cwd: &Path) -> Result<Self> {
        let loaded = config::discover(cli.config.as_deref(), cwd)?;
        crate::ui::output::print_config_warnings(&loaded.warnings, cli.json);

        let config = loaded.config.with_env_overrides()?;
        Ok(Self::merge(cli, config, loaded.base_dir))
    }

    fn merge(cli: &Cli, config: Config, base_dir: PathBuf) -> Self {
        let environment = cli
            .environment
            .or(config.project.environment)
            .unwrap_or_default();
        let project_name = cli
            .project_name
            .clone()
            .or_else(|| config.project.name.clone())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        tracing::debug!(%environment, project = %project_name, base = %base_dir.display(), "resolved run");
        Self {
            config,
            environment,
            project_name,
            base_dir,
        }
    }

    /// Stage directories as absolute paths, labelled
    pub fn stage_dirs(&self) -> [(&'static str, PathBuf); 3] {
        let paths = &self.config.paths;
        [
            ("backend", self.base_dir.join(&paths.backend)),
            ("infrastructure", self.base_dir.join(&paths.infrastructure)),
            ("frontend", self.base_dir.join(&paths.frontend)),
        ]
    }
}
