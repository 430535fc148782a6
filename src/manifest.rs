//! # Manifest Schema and Parsing
//!
//! This module defines the data structures that represent the `UPSTREAM`
//! manifest, as well as the logic for parsing it. The manifest is a TOML
//! document declaring which upstream repositories feed the meta-repository
//! and where each one's tree lands.
//!
//! ## Key Components
//!
//! - **`Manifest`**: The whole document, an ordered list of `[[source]]`
//!   tables.
//!
//! - **`Source`**: One upstream repository: its name, maintainer, remote
//!   url, branch, and relocation mappings.
//!
//! - **`Mapping`**: A `["from", "to"]` pair selecting a subtree of the
//!   upstream and the directory it is grafted under.
//!
//! ## Parsing
//!
//! `parse` decodes manifest text and applies the two defaults the format
//! promises: a missing or empty `branch` becomes `"master"`, and a missing
//! or empty `mapping` list becomes the single identity mapping `["/", "/"]`.
//! Everything else is taken as written. There is deliberately no reachability
//! or url validation here; a manifest that decodes is a manifest that plans.
//!
//! ```toml
//! [[source]]
//! name = "docs"
//! owner = "docs-team"
//! url = "https://git.example.com/docs.git"
//! branch = "main"
//! mapping = [["/", "/documentation"]]
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Well-known manifest location, relative to the working directory.
pub const MANIFEST_PATH: &str = "./UPSTREAM";

/// Branch fetched from a source that does not name one.
pub const DEFAULT_BRANCH: &str = "master";

/// The parsed `UPSTREAM` manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Upstream sources, in manifest order. Order is meaningful: later
    /// sources are layered over earlier ones.
    #[serde(default, rename = "source")]
    pub sources: Vec<Source>,
}

/// One upstream repository declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Identifier used to derive branch names. A source with an empty name
    /// is skipped at plan time.
    #[serde(default)]
    pub name: String,
    /// Maintainer handle. Informational only.
    #[serde(default)]
    pub owner: String,
    /// Git remote to fetch from. Passed through to `git fetch` verbatim.
    #[serde(default)]
    pub url: String,
    /// Remote branch to fetch.
    #[serde(default)]
    pub branch: String,
    /// Ordered relocation pairs applied to the fetched tree.
    #[serde(default)]
    pub mapping: Vec<Mapping>,
}

/// A single `["from", "to"]` relocation pair.
///
/// `from` selects the subtree of the upstream to keep; `to` names the
/// directory of the meta-repository that subtree is grafted under. Both are
/// canonicalized at plan time, so `"/"`, `"."`, and `""` all mean "the whole
/// tree".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Mapping {
    pub from: String,
    pub to: String,
}

impl Mapping {
    /// The root-to-root mapping substituted when a source lists none.
    pub fn identity() -> Self {
        Mapping {
            from: "/".to_string(),
            to: "/".to_string(),
        }
    }
}

impl From<(String, String)> for Mapping {
    fn from((from, to): (String, String)) -> Self {
        Mapping { from, to }
    }
}

impl From<Mapping> for (String, String) {
    fn from(mapping: Mapping) -> Self {
        (mapping.from, mapping.to)
    }
}

impl Source {
    /// Apply the manifest defaults, returning the normalized source.
    fn with_defaults(mut self) -> Self {
        if self.branch.is_empty() {
            self.branch = DEFAULT_BRANCH.to_string();
        }
        if self.mapping.is_empty() {
            self.mapping.push(Mapping::identity());
        }
        self
    }
}

/// Parses manifest text into a `Manifest`, applying per-source defaults.
pub fn parse(content: &str) -> Result<Manifest> {
    let mut manifest: Manifest = toml::from_str(content)?;
    manifest.sources = manifest
        .sources
        .into_iter()
        .map(Source::with_defaults)
        .collect();
    Ok(manifest)
}

/// Parse a `Manifest` from a file path
pub fn load<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
