use std::sync::Arc;

use anyhow::Result;
use shipit::infrastructure::preflight;
use shipit::{
    DeployEventSink, DeployOptions, DeployUseCase, DirStack, JsonEventSink, ProcessRunner,
    StdoutMode,
};

use crate::commands::RunContext;
use crate::ui::console::ConsoleEventSink;
use crate::ui::terminal::detect_capabilities;

pub fn cmd_deploy(ctx: RunContext, json: bool, verbose: u8) -> Result<()> {
    // Nothing runs unless every tool is there
    preflight::ensure_tools(&ctx.config.programs())?;

    let (runner, sink): (ProcessRunner, Arc<dyn DeployEventSink>) = if json {
        (
            ProcessRunner::new().with_stdout_mode(StdoutMode::ToStderr),
            Arc::new(JsonEventSink::stdout()),
        )
    } else {
        (
            ProcessRunner::new(),
            Arc::new(ConsoleEventSink::stdout(detect_capabilities(), verbose > 0)),
        )
    };

    let mut dirs = DirStack::new(&ctx.base_dir);
    let options = DeployOptions::new(ctx.environment)
        .with_project_name(ctx.project_name)
        .with_config(ctx.config);

    let summary = DeployUseCase::new(runner).execute_with_events(&options, &mut dirs, sink)?;
    tracing::info!(cdn = %summary.cdn_url, "deploy finished");
    Ok(())
}
