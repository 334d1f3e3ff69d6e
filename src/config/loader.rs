//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, Environment, OutputFormat};
use crate::error::{ShipError, ShipResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "shipit.toml";

/// A config together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Config file path, `None` when running on defaults
    pub path: Option<PathBuf>,
    /// Directory that relative stage paths resolve against
    pub base_dir: PathBuf,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.backend.command.is_empty() || config.backend.program().is_empty() {
        return Err(ShipError::InvalidConfig {
            file: path.to_path_buf(),
            message: "backend.command must name a program".to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config for a run.
///
/// An explicit path must exist. Otherwise `shipit.toml` in `cwd` is used when
/// present, and built-in defaults when not.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ShipResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !path.is_file() {
                return Err(ShipError::InvalidConfig {
                    file: path,
                    message: "config file does not exist".to_string(),
                });
            }
            Some(path)
        }
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    match path {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            let base_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            Ok(LoadedConfig {
                config,
                warnings,
                path: Some(path),
                base_dir,
            })
        }
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(LoadedConfig {
                config: Config::default(),
                warnings: Vec::new(),
                path: None,
                base_dir: cwd.to_path_buf(),
            })
        }
    }
}

/// Apply environment variable overrides (SHIPIT_* prefix) from the process env
pub fn with_env_overrides(config: Config) -> ShipResult<Config> {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply SHIPIT_* overrides read through `get_env`; warnings go to `warnings`.
///
/// An unknown `SHIPIT_ENVIRONMENT` is an error, since guessing the target
/// stack is never safe. Other knobs warn and keep the configured value.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> ShipResult<Config> {
    // SHIPIT_ENVIRONMENT
    if let Some(value) = get_env("SHIPIT_ENVIRONMENT").filter(|v| !v.trim().is_empty()) {
        config.project.environment = Some(value.parse::<Environment>()?);
    }

    // SHIPIT_PROJECT
    if let Some(value) = get_env("SHIPIT_PROJECT") {
        let value = value.trim();
        if !value.is_empty() {
            config.project.name = Some(value.to_string());
        }
    }

    // SHIPIT_OUTPUT_FORMAT
    if let Some(value) = get_env("SHIPIT_OUTPUT_FORMAT") {
        let current = config.provision.output_format;
        config.provision.output_format = EnvVarValidator::new(
            "SHIPIT_OUTPUT_FORMAT",
            &["json", "raw"],
        )
        .parse_with_writer(&value, OutputFormat::parse, current, &mut *warnings);
    }

    // SHIPIT_AUTO_APPROVE
    if let Some(value) = get_env("SHIPIT_AUTO_APPROVE") {
        let current = config.provision.auto_approve;
        config.provision.auto_approve = EnvVarValidator::new(
            "SHIPIT_AUTO_APPROVE",
            &["true", "false"],
        )
        .parse_with_writer(&value, parse_bool, current, &mut *warnings);
    }

    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "name",
        "environment",
        "paths",
        "backend",
        "infrastructure",
        "frontend",
        "command",
        "provision",
        "program",
        "production_var_file",
        "auto_approve",
        "output_format",
        "outputs",
        "api_url",
        "bucket",
        "custom_domain_url",
        "cdn_url",
        "package_manager",
        "build_dir",
        "env_file",
        "storage",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
