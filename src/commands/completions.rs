//! # Completions Command Implementation
//!
//! Implements the `completions` subcommand. Scripts come straight from
//! `clap_complete` for the shell the user names, so tab-completion covers
//! every `repoweave` command and flag without any hand-maintained lists.
//!
//! ## Example
//!
//! ```bash
//! # Generate and install bash completions
//! repoweave completions bash > ~/.local/share/bash-completion/completions/repoweave
//!
//! # Generate zsh completions
//! repoweave completions zsh > ~/.zfunc/_repoweave
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
///
/// Writes the completion script for the requested shell to stdout; the user
/// redirects it into wherever their shell loads completions from.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "repoweave", &mut io::stdout());
    Ok(())
}
