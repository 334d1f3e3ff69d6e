//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Environment, OutputFormat};
use crate::error::ShipResult;

use super::loader;

/// Project name used when neither flag, env var nor config sets one
pub const DEFAULT_PROJECT_NAME: &str = "webapp";

/// Run defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub environment: Option<Environment>,
}

/// Stage directories, relative to the config file's directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_backend_dir")]
    pub backend: PathBuf,

    #[serde(default = "default_infrastructure_dir")]
    pub infrastructure: PathBuf,

    #[serde(default = "default_frontend_dir")]
    pub frontend: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            backend: default_backend_dir(),
            infrastructure: default_infrastructure_dir(),
            frontend: default_frontend_dir(),
        }
    }
}

fn default_backend_dir() -> PathBuf {
    PathBuf::from("backend")
}

fn default_infrastructure_dir() -> PathBuf {
    PathBuf::from("infrastructure")
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

/// Backend packaging command (program followed by its arguments)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_command")]
    pub command: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            command: default_backend_command(),
        }
    }
}

fn default_backend_command() -> Vec<String> {
    vec!["make".to_string(), "package".to_string()]
}

impl BackendConfig {
    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }
}

/// Provisioning CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    #[serde(default = "default_provision_program")]
    pub program: String,

    /// Variables file passed to `apply` for production, relative to the
    /// infrastructure directory
    #[serde(default = "default_production_var_file")]
    pub production_var_file: PathBuf,

    /// Pass `-auto-approve` to `apply`
    #[serde(default)]
    pub auto_approve: bool,

    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            program: default_provision_program(),
            production_var_file: default_production_var_file(),
            auto_approve: false,
            output_format: OutputFormat::default(),
        }
    }
}

fn default_provision_program() -> String {
    "terraform".to_string()
}

fn default_production_var_file() -> PathBuf {
    PathBuf::from("prod.tfvars")
}

/// Names of the provisioning outputs the pipeline reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputsConfig {
    #[serde(default = "default_api_url_output")]
    pub api_url: String,

    #[serde(default = "default_bucket_output")]
    pub bucket: String,

    #[serde(default = "default_custom_domain_output")]
    pub custom_domain_url: String,

    #[serde(default = "default_cdn_url_output")]
    pub cdn_url: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url_output(),
            bucket: default_bucket_output(),
            custom_domain_url: default_custom_domain_output(),
            cdn_url: default_cdn_url_output(),
        }
    }
}

fn default_api_url_output() -> String {
    "api_url".to_string()
}

fn default_bucket_output() -> String {
    "frontend_bucket_name".to_string()
}

fn default_custom_domain_output() -> String {
    "custom_domain_url".to_string()
}

fn default_cdn_url_output() -> String {
    "cloudfront_url".to_string()
}

/// Frontend build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Build output directory, relative to the frontend directory
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Build-time environment file, relative to the frontend directory
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            build_dir: default_build_dir(),
            env_file: default_env_file(),
        }
    }
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env.production")
}

/// Cloud storage CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_program")]
    pub program: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            program: default_storage_program(),
        }
    }
}

fn default_storage_program() -> String {
    "aws".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub provision: ProvisionConfig,

    #[serde(default)]
    pub outputs: OutputsConfig,

    #[serde(default)]
    pub frontend: FrontendConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Apply environment variable overrides (SHIPIT_* prefix)
    pub fn with_env_overrides(self) -> ShipResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Every program a deploy run may invoke, deduplicated, in stage order
    pub fn programs(&self) -> Vec<&str> {
        let mut programs: Vec<&str> = Vec::new();
        for program in [
            self.backend.program(),
            self.provision.program.as_str(),
            self.frontend.package_manager.as_str(),
            self.storage.program.as_str(),
        ] {
            if !programs.contains(&program) {
                programs.push(program);
            }
        }
        programs
    }
}
