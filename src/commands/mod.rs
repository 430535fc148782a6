//! # CLI Command Implementations
//!
//! One file per `repoweave` subcommand.
//!
//! ## Structure
//!
//! Every command module follows the same shape: an `Args` struct holding the
//! clap-derived options for that subcommand, and an `execute` function that
//! consumes the parsed `Args` and drives the library code. `execute` is the
//! only entry point the dispatcher in `cli.rs` calls.

pub mod completions;
pub mod plan;
pub mod validate;
