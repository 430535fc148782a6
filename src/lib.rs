//! # Repoweave Library
//!
//! This library plans the assembly of a meta-repository from the upstream
//! repositories declared in an `UPSTREAM` manifest. It is designed to be used
//! by the `repoweave` command-line tool but can also be embedded by anything
//! that wants to inspect or rewrite a build before running it.
//!
//! ## Quick Example
//!
//! ```
//! use repoweave::branch::BuildId;
//! use repoweave::{manifest, plan, script};
//!
//! let toml = r#"
//! [[source]]
//! name = "docs"
//! url = "https://git.example.com/docs.git"
//! mapping = [["/", "/documentation"]]
//! "#;
//!
//! let manifest = manifest::parse(toml).unwrap();
//! let build: BuildId = "0a1b2c3d".parse().unwrap();
//! let plan = plan::generate(&manifest, &build);
//! let script = script::render(&plan);
//!
//! assert!(script.starts_with("# Starting build 0a1b2c3d\nset -e\n"));
//! assert!(script.contains(
//!     "git fetch -f https://git.example.com/docs.git master:repoweave/0a1b2c3d/base/docs"
//! ));
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: The `UPSTREAM` TOML document listing the
//!   upstream sources and where each one's tree lands.
//! - **Build ids and branches (`branch`)**: Every run is scoped by a random
//!   eight-hex-character `BuildId`; all branch names are pure functions of
//!   the id, the source name, and the mapping index.
//! - **Planning (`plan`)**: Turns a manifest into an ordered list of
//!   repository operations. Generation is side-effect-free.
//! - **Rendering (`script`)**: Turns a plan into a shell script of git
//!   commands, one commented block per operation.
//!
//! ## Execution Flow
//!
//! The emitted script, run from inside the meta-repository, performs:
//!
//! 1.  **Fetch**: Bring every named source's branch into a base branch.
//! 2.  **Seed**: Copy the local integration branch to the destination branch.
//! 3.  **Map**: Per mapping, copy the base branch, extract the mapped
//!     subtree, and relocate it under its target directory.
//! 4.  **Layer**: Merge each map branch into the destination branch, later
//!     layers winning conflicts.
//!
//! The tool itself never touches the repository; it only writes the script
//! to stdout for review, versioning, or piping into `sh`.

pub mod branch;
pub mod error;
pub mod manifest;
pub mod path;
pub mod plan;
pub mod script;

#[cfg(test)]
mod path_proptest;
