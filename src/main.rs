//! # Repoweave CLI
//!
//! Binary entry point for the `repoweave` command-line tool.
//!
//! All it does is hand the `clap`-parsed arguments to the dispatcher and
//! report any error that bubbles back up. Planning and rendering live in the
//! library crate, so the binary stays a thin shell over reusable code.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
