//! Preflight checks
//!
//! Resolves tools on PATH and verifies stage directories before anything runs.

use std::path::{Path, PathBuf};

use crate::error::{ShipError, ShipResult};

/// Outcome of one preflight check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    /// Resolved location on success, failure description otherwise
    pub detail: Result<PathBuf, String>,
}

impl CheckResult {
    pub fn is_ok(&self) -> bool {
        self.detail.is_ok()
    }
}

/// Resolve a program the way the child-process spawn will
pub fn resolve_tool(program: &str) -> ShipResult<PathBuf> {
    which::which(program).map_err(|_| ShipError::ToolNotFound {
        program: program.to_string(),
    })
}

/// Fail with the first program that does not resolve
pub fn ensure_tools(programs: &[&str]) -> ShipResult<()> {
    for &program in programs {
        let path = resolve_tool(program)?;
        tracing::debug!(program, path = %path.display(), "resolved tool");
    }
    Ok(())
}

/// Check every program without stopping at the first failure
pub fn check_tools(programs: &[&str]) -> Vec<CheckResult> {
    programs
        .iter()
        .map(|program| CheckResult {
            name: program.to_string(),
            detail: resolve_tool(program).map_err(|e| e.to_string()),
        })
        .collect()
}

/// Check that each labelled directory exists
pub fn check_directories(dirs: &[(&str, &Path)]) -> Vec<CheckResult> {
    dirs.iter()
        .map(|(label, path)| CheckResult {
            name: label.to_string(),
            detail: if path.is_dir() {
                Ok(path.to_path_buf())
            } else {
                Err(ShipError::DirectoryNotFound {
                    path: path.to_path_buf(),
                }
                .to_string())
            },
        })
        .collect()
}

/// Check that a labelled file exists
pub fn check_file(label: &str, path: &Path) -> CheckResult {
    CheckResult {
        name: label.to_string(),
        detail: if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(format!("file not found: {}", path.display()))
        },
    }
}
