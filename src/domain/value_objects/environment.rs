//! Environment value object - which stack a run deploys to

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShipError;

/// Deployment environment
///
/// The canonical name doubles as the provisioning workspace name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Day-to-day development stack
    #[default]
    #[value(name = "dev", alias = "development")]
    #[serde(alias = "development")]
    Dev,
    /// Pre-release test stack
    #[value(name = "test")]
    Test,
    /// Production stack
    #[value(name = "prod", alias = "production")]
    #[serde(alias = "production")]
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Test, Environment::Prod];

    /// Canonical name, also used as the workspace name
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    /// Only production gets the dedicated variables file
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Prod)
    }

    fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dev" | "development" => Some(Environment::Dev),
            "test" => Some(Environment::Test),
            "prod" | "production" => Some(Environment::Prod),
            _ => None,
        }
    }
}

impl FromStr for Environment {
    type Err = ShipError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|e| e.as_str()).collect();
            ShipError::UnknownEnvironment {
                value: value.to_string(),
                suggestion: crate::config::closest_match(value, &names).map(str::to_string),
            }
        })
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
