use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use shipit::Environment;

/// shipit - package, provision and publish in one run
#[derive(Parser, Debug)]
#[command(name = "shipit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'shipit' without a command to deploy.")]
pub struct Cli {
    /// Target environment [default: dev]
    #[arg(short, long, visible_alias = "env", value_enum, global = true)]
    pub environment: Option<Environment>,

    /// Project name passed to the stack [default: webapp]
    #[arg(
        short,
        long,
        visible_alias = "project",
        value_parser = NonEmptyStringValueParser::new(),
        global = true
    )]
    pub project_name: Option<String>,

    /// Config file (defaults to ./shipit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build, provision and publish (the default)
    Deploy,

    /// Verify tools and directories without running anything
    Check,
}
