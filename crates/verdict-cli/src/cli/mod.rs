use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CheckArgs, CheckStagedArgs, Commands, FixArgs};

/// Top-level CLI parser for the `verdict` binary.
#[derive(Debug, Parser)]
#[command(
    name = "verdict",
    version,
    about = "verdict - governance checks for decision records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (violations only, no summary)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .verdict or .git)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Config file (defaults to .verdict/config.toml in the project root)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            project: self.project.clone(),
            config: self.config.clone(),
        }
    }
}
