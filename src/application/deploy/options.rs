//! Deploy Options
//!
//! Everything a run needs besides its collaborators.

use crate::config::{Config, DEFAULT_PROJECT_NAME};
use crate::domain::value_objects::Environment;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Target environment; also the provisioning workspace name
    pub environment: Environment,
    /// Passed to `apply` as `project_name`
    pub project_name: String,
    /// Tools, paths and output names
    pub config: Config,
}

impl DeployOptions {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            config: Config::default(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Arguments for the provisioning `apply` call.
    ///
    /// Only production receives the variables file; every environment gets
    /// the inline project and environment variables.
    pub fn apply_args(&self) -> Vec<String> {
        let provision = &self.config.provision;
        let mut args = vec!["apply".to_string()];
        if provision.auto_approve {
            args.push("-auto-approve".to_string());
        }
        if self.environment.is_production() {
            args.push(format!(
                "-var-file={}",
                provision.production_var_file.display()
            ));
        }
        args.push("-var".to_string());
        args.push(format!("project_name={}", self.project_name));
        args.push("-var".to_string());
        args.push(format!("environment={}", self.environment));
        args
    }
}
