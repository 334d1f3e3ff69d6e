use shipit::ShipError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{self, Icon};

/// Suggested next step for errors the operator can fix
fn hint(err: &ShipError) -> Option<String> {
    match err {
        ShipError::ToolNotFound { program } => Some(format!(
            "Install '{program}' or configure a different program in shipit.toml"
        )),
        ShipError::DirectoryNotFound { .. } => Some(
            "Run shipit from the project root, or set [paths] in shipit.toml".to_string(),
        ),
        ShipError::MissingOutput { name } => Some(format!(
            "Check that the stack defines output '{name}' and that apply succeeded"
        )),
        ShipError::InvalidOutput { .. } => Some(
            "The provisioning tool did not answer with a single value; inspect its output"
                .to_string(),
        ),
        ShipError::UnknownEnvironment { .. } => Some("Use one of: dev, test, prod".to_string()),
        _ => None,
    }
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!(
        "{} {}\n",
        icon,
        theme::paint(&format!("Error: {err}"), theme::colors::ERROR, supports_color)
    );

    if let Some(hint) = err.downcast_ref::<ShipError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            theme::paint(&hint, theme::colors::DIM, supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(ship) = err.downcast_ref::<ShipError>() {
            output["exit_code"] = ship.exit_code().into();
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        let file = match err.downcast_ref::<ShipError>() {
            Some(ShipError::InvalidConfig { file, .. }) => Some(file.to_string_lossy().to_string()),
            _ => None,
        };
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                None,
                Some("shipit"),
            )
        );
    }

    eprint!("{}", format_error_with(err, caps.supports_color, caps.supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_has_no_hint() {
        let err = anyhow::Error::new(ShipError::ExecutionFailed {
            message: "Frontend build failed".to_string(),
            command: "npm run build".to_string(),
            code: Some(1),
        });
        assert_eq!(
            format_error_with(&err, false, false),
            "[FAIL] Error: Frontend build failed: `npm run build` exited with status 1\n"
        );
    }

    #[test]
    fn missing_tool_suggests_install() {
        let err = anyhow::Error::new(ShipError::ToolNotFound {
            program: "terraform".to_string(),
        });
        let rendered = format_error_with(&err, false, true);
        assert!(rendered.starts_with("✗ Error: 'terraform' was not found on PATH\n"));
        assert!(rendered.contains("↳ Install 'terraform'"));
    }

    #[test]
    fn foreign_errors_render_message() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error_with(&err, false, false), "[FAIL] Error: something else\n");
    }
}
