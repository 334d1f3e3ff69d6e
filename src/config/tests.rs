//! Tests for the config module

use super::loader::{discover, with_env_overrides_from};
use super::types::*;
use crate::domain::value_objects::{Environment, OutputFormat};
use crate::error::ShipError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.project.name, None);
    assert_eq!(config.project.environment, None);
    assert_eq!(config.paths.backend, PathBuf::from("backend"));
    assert_eq!(config.paths.infrastructure, PathBuf::from("infrastructure"));
    assert_eq!(config.paths.frontend, PathBuf::from("frontend"));
    assert_eq!(config.backend.program(), "make");
    assert_eq!(config.backend.args(), ["package".to_string()]);
    assert_eq!(config.provision.program, "terraform");
    assert_eq!(config.provision.output_format, OutputFormat::Json);
    assert!(!config.provision.auto_approve);
    assert_eq!(config.frontend.env_file, PathBuf::from(".env.production"));
    assert_eq!(config.storage.program, "aws");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[project]
name = "shop"
environment = "production"

[paths]
infrastructure = "terraform"

[backend]
command = ["dotnet", "lambda", "package"]

[provision]
production_var_file = "vars/prod.tfvars"
auto_approve = true
output_format = "raw"

[outputs]
bucket = "site_bucket"

[frontend]
package_manager = "pnpm"
build_dir = "dist"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.project.name.as_deref(), Some("shop"));
    assert_eq!(config.project.environment, Some(Environment::Prod));
    assert_eq!(config.paths.infrastructure, PathBuf::from("terraform"));
    assert_eq!(config.paths.backend, PathBuf::from("backend"));
    assert_eq!(config.backend.program(), "dotnet");
    assert_eq!(config.backend.args().len(), 2);
    assert_eq!(config.provision.production_var_file, PathBuf::from("vars/prod.tfvars"));
    assert!(config.provision.auto_approve);
    assert_eq!(config.provision.output_format, OutputFormat::Raw);
    assert_eq!(config.outputs.bucket, "site_bucket");
    assert_eq!(config.outputs.api_url, "api_url");
    assert_eq!(config.frontend.package_manager, "pnpm");
    assert_eq!(config.frontend.build_dir, PathBuf::from("dist"));
}

#[test]
fn test_programs_are_deduplicated_in_stage_order() {
    let mut config = Config::default();
    assert_eq!(config.programs(), vec!["make", "terraform", "npm", "aws"]);

    config.backend.command = vec!["npm".to_string(), "run".to_string(), "package".to_string()];
    assert_eq!(config.programs(), vec!["npm", "terraform", "aws"]);
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipit.toml");

    fs::write(&path, "[provision]\nauto_aprove = true\n").unwrap();

    let loaded = discover(Some(&path), dir.path()).unwrap();
    let warnings = &loaded.warnings;
    assert!(!loaded.config.provision.auto_approve);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "auto_aprove");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("auto_approve".to_string()));
}

#[test]
fn test_config_load_rejects_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipit.toml");
    fs::write(&path, "[project\nname = ").unwrap();

    let err = discover(Some(&path), dir.path()).unwrap_err();
    assert!(matches!(err, ShipError::InvalidConfig { .. }));
}

#[test]
fn test_config_load_rejects_empty_backend_command() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipit.toml");
    fs::write(&path, "[backend]\ncommand = []\n").unwrap();

    let err = discover(Some(&path), dir.path()).unwrap_err();
    assert!(err.to_string().contains("backend.command"));
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let loaded = discover(None, dir.path()).unwrap();

    assert!(loaded.path.is_none());
    assert_eq!(loaded.base_dir, dir.path());
    assert_eq!(loaded.config.provision.program, "terraform");
}

#[test]
fn test_discover_finds_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shipit.toml"), "[project]\nname = \"shop\"\n").unwrap();

    let loaded = discover(None, dir.path()).unwrap();
    assert_eq!(loaded.path, Some(dir.path().join("shipit.toml")));
    assert_eq!(loaded.config.project.name.as_deref(), Some("shop"));
}

#[test]
fn test_discover_explicit_path_sets_base_dir() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("deploy");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("stack.toml"), "").unwrap();

    let loaded = discover(Some(Path::new("deploy/stack.toml")), dir.path()).unwrap();
    assert_eq!(loaded.base_dir, nested);
}

#[test]
fn test_discover_missing_explicit_path_is_error() {
    let dir = tempdir().unwrap();
    let err = discover(Some(Path::new("nope.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, ShipError::InvalidConfig { .. }));
}

#[test]
fn test_env_override_environment_and_project() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_of(&[("SHIPIT_ENVIRONMENT", "test"), ("SHIPIT_PROJECT", " shop ")]),
        &mut sink,
    )
    .unwrap();

    assert_eq!(config.project.environment, Some(Environment::Test));
    assert_eq!(config.project.name.as_deref(), Some("shop"));
    assert!(sink.is_empty());
}

#[test]
fn test_env_override_unknown_environment_is_error() {
    let mut sink = Vec::new();
    let err = with_env_overrides_from(
        Config::default(),
        env_of(&[("SHIPIT_ENVIRONMENT", "prdo")]),
        &mut sink,
    )
    .unwrap_err();

    assert!(err.to_string().contains("did you mean 'prod'?"));
}

#[test]
fn test_env_override_output_format_and_auto_approve() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_of(&[("SHIPIT_OUTPUT_FORMAT", "raw"), ("SHIPIT_AUTO_APPROVE", "yes")]),
        &mut sink,
    )
    .unwrap();

    assert_eq!(config.provision.output_format, OutputFormat::Raw);
    assert!(config.provision.auto_approve);
}

#[test]
fn test_env_override_invalid_knob_keeps_configured_value() {
    let mut config = Config::default();
    config.provision.output_format = OutputFormat::Raw;

    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        config,
        env_of(&[("SHIPIT_OUTPUT_FORMAT", "yaml")]),
        &mut sink,
    )
    .unwrap();

    assert_eq!(config.provision.output_format, OutputFormat::Raw);
    let msg = String::from_utf8(sink).unwrap();
    assert!(msg.contains("SHIPIT_OUTPUT_FORMAT"));
}

#[test]
fn test_env_override_blank_values_are_ignored() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_of(&[("SHIPIT_ENVIRONMENT", "  "), ("SHIPIT_PROJECT", "")]),
        &mut sink,
    )
    .unwrap();

    assert_eq!(config.project.environment, None);
    assert_eq!(config.project.name, None);
}
