//! Stage value object - the fixed steps of a deploy run

use serde::Serialize;

/// Deploy stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Package,
    Provision,
    Outputs,
    Publish,
    Summary,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Package,
        Stage::Provision,
        Stage::Outputs,
        Stage::Publish,
        Stage::Summary,
    ];

    /// 1-based position, used for "[n/5]" progress labels
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Package => "Package backend",
            Stage::Provision => "Provision infrastructure",
            Stage::Outputs => "Read outputs",
            Stage::Publish => "Publish frontend",
            Stage::Summary => "Summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
