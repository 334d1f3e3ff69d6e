//! Domain Value Objects
//!
//! Immutable value types shared by the config layer and the deploy pipeline.

mod config_warning;
mod environment;
mod output_format;
mod stage;

pub use config_warning::ConfigWarning;
pub use environment::Environment;
pub use output_format::OutputFormat;
pub use stage::Stage;
