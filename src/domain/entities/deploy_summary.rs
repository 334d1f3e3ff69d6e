//! Deploy summary entity
//!
//! What a completed run reports back to the operator.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::WorkspaceAction;
use crate::domain::value_objects::Environment;

/// Result of a completed deploy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploySummary {
    pub environment: Environment,
    pub project: String,
    pub workspace: WorkspaceAction,
    pub api_url: String,
    pub bucket: String,
    /// `None` when the stack defines no custom domain or it could not be read
    pub custom_domain_url: Option<String>,
    pub cdn_url: String,
    pub env_file: PathBuf,
}

impl DeploySummary {
    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("Environment", self.environment.as_str()),
            ("Project", self.project.as_str()),
            ("API", self.api_url.as_str()),
            ("CDN", self.cdn_url.as_str()),
        ];
        if let Some(custom) = &self.custom_domain_url {
            rows.push(("Custom domain", custom.as_str()));
        }
        rows
    }
}
