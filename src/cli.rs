//! Argument parsing and dispatch for the `repoweave` binary

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Repoweave - Assemble a meta-repository from upstream sources
#[derive(Parser, Debug)]
#[command(name = "repoweave")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit the shell script that builds the meta-repository
    Plan(commands::plan::PlanArgs),
    /// Check an UPSTREAM manifest without emitting a script
    Validate(commands::validate::ValidateArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Initialize logging, then run the selected subcommand.
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Plan(args) => commands::plan::execute(args),
            Commands::Validate(args) => commands::validate::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr at the requested level. `RUST_LOG` still
/// takes precedence when set, so the flag never fights the environment.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
