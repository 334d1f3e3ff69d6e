use anyhow::{bail, Result};
use shipit::infrastructure::preflight::{self, CheckResult};

use crate::commands::RunContext;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{self, Icon};

/// Every preflight check for this run, tools first
fn collect(ctx: &RunContext) -> Vec<CheckResult> {
    let mut results = preflight::check_tools(&ctx.config.programs());

    let dirs = ctx.stage_dirs();
    let labelled: Vec<(&str, &std::path::Path)> = dirs
        .iter()
        .map(|(label, path)| (*label, path.as_path()))
        .collect();
    results.extend(preflight::check_directories(&labelled));

    if ctx.environment.is_production() {
        let var_file = dirs[1]
            .1
            .join(&ctx.config.provision.production_var_file);
        results.push(preflight::check_file("production var file", &var_file));
    }
    results
}

pub fn cmd_check(ctx: RunContext, json: bool) -> Result<()> {
    let results = collect(&ctx);
    let failed = results.iter().filter(|r| !r.is_ok()).count();

    if json {
        for r in &results {
            let (ok, detail) = match &r.detail {
                Ok(path) => (true, path.display().to_string()),
                Err(reason) => (false, reason.clone()),
            };
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "check",
                "name": r.name,
                "ok": ok,
                "detail": detail,
            }));
        }
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "check_complete",
            "environment": ctx.environment,
            "passed": results.len() - failed,
            "failed": failed,
        }));
    } else {
        let caps = detect_capabilities();
        println!(
            "{} Checking {} for {}",
            Icon::Check.colored(caps.supports_color, caps.supports_unicode),
            ctx.project_name,
            ctx.environment
        );
        let width = results.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for r in &results {
            let (icon, detail) = match &r.detail {
                Ok(path) => (Icon::Success, path.display().to_string()),
                Err(reason) => (Icon::Error, reason.clone()),
            };
            println!(
                "  {} {:<width$}  {}",
                icon.colored(caps.supports_color, caps.supports_unicode),
                r.name,
                theme::paint(&detail, theme::colors::DIM, caps.supports_color)
            );
        }
    }

    if failed > 0 {
        bail!("{failed} of {} checks failed", results.len());
    }
    Ok(())
}
