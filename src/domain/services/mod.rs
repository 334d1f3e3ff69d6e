//! Domain Services
//!
//! Pure functions the deploy pipeline uses to interpret tool output.

pub mod output_validator;
pub mod workspace;

pub use output_validator::{validate, validate_json, validate_raw, OutputValue, WARNING_PREFIX};
pub use workspace::{parse_workspaces, plan_workspace, WorkspaceAction};
