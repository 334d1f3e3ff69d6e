use shipit::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

fn describe(w: &ConfigWarning) -> String {
    match w.line {
        Some(line) => format!("Unknown config key '{}' in {}:{}", w.key, w.file.display(), line),
        None => format!("Unknown config key '{}' in {}", w.key, w.file.display()),
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    let github = std::env::var("GITHUB_ACTIONS").is_ok();
    for w in warnings {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": w.file,
                "line": w.line,
                "suggestion": w.suggestion,
            }));
            continue;
        }

        if github {
            let file = w.file.to_string_lossy();
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &describe(w),
                    Some(&file),
                    w.line,
                    Some("shipit"),
                )
            );
        }

        eprintln!("⚠ {}", describe(w));
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
