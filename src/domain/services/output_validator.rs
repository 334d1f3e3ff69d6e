//! Output validation
//!
//! Turns what the provisioning tool printed for `output <name>` into a value,
//! or explains why it cannot be used.

use serde_json::Value;

use crate::domain::value_objects::OutputFormat;
use crate::error::{ShipError, ShipResult};

/// Prefix the provisioning tool uses when it answers with a warning instead of
/// a value (e.g. "Warning: No outputs found").
pub const WARNING_PREFIX: &str = "Warning:";

/// A validated provisioning output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputValue {
    pub name: String,
    pub value: String,
    pub allow_empty: bool,
}

impl OutputValue {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Validate a plain-text answer.
///
/// `text` is the combined stdout/stderr of the query.
pub fn validate_raw(name: &str, text: &str, allow_empty: bool) -> ShipResult<OutputValue> {
    let value = text.trim();
    if value.starts_with(WARNING_PREFIX) {
        return Err(invalid(name, value));
    }
    finish(name, value.to_string(), allow_empty)
}

/// Validate a structured answer.
///
/// Strings, numbers and booleans are scalar values, `null` is empty. Anything
/// else cannot be substituted into a command line.
pub fn validate_json(name: &str, text: &str, allow_empty: bool) -> ShipResult<OutputValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return finish(name, String::new(), allow_empty);
    }
    if trimmed.starts_with(WARNING_PREFIX) {
        return Err(invalid(name, trimmed));
    }

    let parsed: Value = serde_json::from_str(trimmed).map_err(|_| invalid(name, trimmed))?;
    let value = match parsed {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => return Err(invalid(name, trimmed)),
    };
    finish(name, value, allow_empty)
}

/// Validate according to `format`
pub fn validate(
    format: OutputFormat,
    name: &str,
    text: &str,
    allow_empty: bool,
) -> ShipResult<OutputValue> {
    match format {
        OutputFormat::Json => validate_json(name, text, allow_empty),
        OutputFormat::Raw => validate_raw(name, text, allow_empty),
    }
}

fn finish(name: &str, value: String, allow_empty: bool) -> ShipResult<OutputValue> {
    if value.is_empty() && !allow_empty {
        return Err(ShipError::MissingOutput {
            name: name.to_string(),
        });
    }
    Ok(OutputValue {
        name: name.to_string(),
        value,
        allow_empty,
    })
}

fn invalid(name: &str, value: &str) -> ShipError {
    ShipError::InvalidOutput {
        name: name.to_string(),
        value: first_line(value).to_string(),
    }
}

fn first_line(value: &str) -> &str {
    value.lines().next().unwrap_or(value)
}
