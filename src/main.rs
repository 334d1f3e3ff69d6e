//! shipit CLI - deployment sequencer
//!
//! Usage: shipit [OPTIONS] [COMMAND]
//!
//! Commands:
//!   deploy  Build, provision and publish (default)
//!   check   Verify tools and directories without running anything

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::RunContext;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = RunContext::resolve(cli)?;
    match cli.command.unwrap_or(Commands::Deploy) {
        Commands::Deploy => commands::deploy::cmd_deploy(ctx, cli.json, cli.verbose),
        Commands::Check => commands::check::cmd_check(ctx, cli.json),
    }
}

/// Failing command's own status when there is one, 1 otherwise
fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<shipit::ShipError>()
        .map(shipit::ShipError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            ui::error::print_error(&err, cli.json);
            ExitCode::from(exit_code(&err))
        }
    }
}
