//! Output format value object - how provisioning outputs are queried

use serde::{Deserialize, Serialize};

/// Query mode for the provisioning tool's `output` subcommand
///
/// `Json` asks the tool for a structured value. `Raw` reads plain text and
/// relies on the `Warning:` prefix to spot degraded answers, which only works
/// as long as the tool keeps that wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Raw,
}

impl OutputFormat {
    /// Flag passed to `output` for this mode
    pub fn flag(&self) -> &'static str {
        match self {
            OutputFormat::Json => "-json",
            OutputFormat::Raw => "-raw",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "raw" | "text" => Some(OutputFormat::Raw),
            _ => None,
        }
    }
}
