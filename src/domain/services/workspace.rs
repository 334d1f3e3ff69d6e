//! Workspace selection
//!
//! Decides between selecting an existing provisioning workspace and creating
//! a new one, from the text of `workspace list`.

use serde::Serialize;

/// Marker the provisioning tool prints in front of the active workspace
const CURRENT_MARKER: char = '*';

/// What to do with the environment's workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "name", rename_all = "lowercase")]
pub enum WorkspaceAction {
    /// Workspace already exists
    Select(String),
    /// Workspace is missing
    Create(String),
}

impl WorkspaceAction {
    /// `workspace` subcommand carrying this action
    pub fn subcommand(&self) -> &'static str {
        match self {
            WorkspaceAction::Select(_) => "select",
            WorkspaceAction::Create(_) => "new",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            WorkspaceAction::Select(name) | WorkspaceAction::Create(name) => name,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, WorkspaceAction::Create(_))
    }
}

/// Parse `workspace list` output into workspace names.
///
/// One name per line; the current-selection marker and surrounding
/// whitespace are stripped, blank lines are dropped.
pub fn parse_workspaces(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(CURRENT_MARKER).unwrap_or(line).trim()
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Select `target` if it is listed, otherwise create it.
pub fn plan_workspace(existing: &[String], target: &str) -> WorkspaceAction {
    if existing.iter().any(|name| name == target) {
        WorkspaceAction::Select(target.to_string())
    } else {
        WorkspaceAction::Create(target.to_string())
    }
}
