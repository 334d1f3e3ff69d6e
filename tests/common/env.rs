//! Test environment builder for isolated shipit runs.
//!
//! Provides `TestEnv` - a temp project with `backend/`, `infrastructure/`
//! and `frontend/`, fake tools on PATH, and helpers to run the binary.

use std::collections::BTreeMap;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::FAKE_TOOLS;

/// Result of running the shipit binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// One logged tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub cwd: PathBuf,
}

/// Isolated project with fake tools.
///
/// The binary runs with a cleared environment so CI variables on the host
/// do not leak into assertions.
pub struct TestEnv {
    pub root: TempDir,
    tools: TempDir,
    log: PathBuf,
    env: BTreeMap<String, String>,
}

impl TestEnv {
    /// Healthy project: `dev` workspace exists, required outputs are set,
    /// no custom domain
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create project dir");
        for dir in ["backend", "infrastructure", "frontend"] {
            std::fs::create_dir_all(root.path().join(dir)).expect("Failed to create stage dir");
        }

        let tools = tempfile::tempdir().expect("Failed to create tool dir");
        for (name, script) in FAKE_TOOLS {
            write_tool(tools.path(), name, script);
        }
        let log = tools.path().join("calls.log");

        Self {
            root,
            tools,
            log,
            env: BTreeMap::new(),
        }
        .with_env("FAKE_WORKSPACES", "  default\n* dev")
        .with_env("FAKE_OUTPUT_api_url", "\"https://api.x/\"")
        .with_env("FAKE_OUTPUT_frontend_bucket_name", "\"webapp-site\"")
        .with_env("FAKE_OUTPUT_cloudfront_url", "\"https://d111.cloudfront.net\"")
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without_env(mut self, key: &str) -> Self {
        self.env.remove(key);
        self
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Canonical path of a project directory, as the fake tools report it
    pub fn real_path(&self, relative: &str) -> PathBuf {
        self.path(relative)
            .canonicalize()
            .unwrap_or_else(|e| panic!("Failed to resolve {relative}: {e}"))
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Create subdirectories in the project
    pub fn create_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.path(dir)).expect("Failed to create subdirectory");
        }
    }

    /// Run shipit from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    /// Run shipit from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let path = format!("{}:/usr/bin:/bin", self.tools.path().display());
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shipit"));
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("PATH", path)
            .env("HOME", self.root.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("SHIPIT_TEST_LOG", &self.log)
            .envs(&self.env);

        let output = cmd.output().expect("Failed to execute shipit");
        output_to_result(output)
    }

    /// Every tool invocation so far, in order
    pub fn calls(&self) -> Vec<Call> {
        let Ok(log) = std::fs::read_to_string(&self.log) else {
            return Vec::new();
        };
        log.lines()
            .filter_map(|line| line.rsplit_once('|'))
            .map(|(command, cwd)| Call {
                command: command.to_string(),
                cwd: PathBuf::from(cwd),
            })
            .collect()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

fn write_tool(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    std::fs::write(&path, script).expect("Failed to write fake tool");
    let mut perms = std::fs::metadata(&path)
        .expect("Failed to stat fake tool")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to make fake tool executable");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
