//! # Build Planning
//!
//! This module turns a parsed manifest into an ordered, side-effect-free
//! `Plan` of repository operations. Rendering the plan as a shell script is
//! a separate concern (see `script`), which keeps generation deterministic
//! and directly testable.
//!
//! A plan always has this shape:
//!
//! 1. A note reporting how many sources were loaded.
//! 2. One fetch per named source, into its base branch. Unnamed sources
//!    contribute a skip note instead.
//! 3. A copy of the local seed branch to the destination branch.
//! 4. Per named source, per mapping, in manifest order: a copy of the base
//!    branch to the mapping's map branch, an optional subtree extraction,
//!    an optional tree relocation, and a merge of the map branch into the
//!    destination branch.
//!
//! Mapping paths are canonicalized before emptiness is decided, so `"/"`,
//! `"."`, `""`, and `"//"` all mean "the whole tree" and produce no
//! extraction or relocation step.

use log::warn;
use rand::{thread_rng, Rng};

use crate::branch::{random_token, BuildId};
use crate::manifest::Manifest;
use crate::path;

/// Local branch the destination branch is seeded from.
pub const SEED_BRANCH: &str = "master";

/// One planned operation against the local repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Progress or diagnostic note, rendered as a comment.
    Note(String),
    /// Fetch `branch` from `url` into the local branch `dst`.
    Fetch {
        url: String,
        branch: String,
        dst: String,
    },
    /// Force-copy the branch `src` to the branch `dst`, replacing `dst`
    /// if it already exists.
    CopyBranch { src: String, dst: String },
    /// Rewrite `branch` in place so that the subtree at `dir` becomes its
    /// root. `dir` is tree-relative and non-empty.
    ExtractSubtree { branch: String, dir: String },
    /// Rewrite `branch` in place so that its whole tree moves under `dir`,
    /// staged through the hidden directory `.<staging>` to avoid moving a
    /// directory into itself. `dir` is tree-relative and non-empty.
    RelocateTree {
        branch: String,
        dir: String,
        staging: String,
    },
    /// Merge `layer` into `onto`, with `layer` winning conflicts.
    MergeLayer { onto: String, layer: String },
}

/// The full ordered operation plan for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub build: BuildId,
    pub steps: Vec<Step>,
}

/// Generates the plan for `manifest` using the thread-local RNG for staging
/// tokens.
pub fn generate(manifest: &Manifest, build: &BuildId) -> Plan {
    generate_with(manifest, build, &mut thread_rng())
}

/// Generates the plan for `manifest`, drawing staging tokens from `rng`.
pub fn generate_with<R: Rng>(manifest: &Manifest, build: &BuildId, rng: &mut R) -> Plan {
    let mut steps = Vec::with_capacity(2 + manifest.sources.len() * 5);

    let count = manifest.sources.len();
    steps.push(Step::Note(format!(
        "Loaded {} source{}",
        count,
        if count == 1 { "" } else { "s" }
    )));

    for source in &manifest.sources {
        if source.name.is_empty() {
            warn!("skipping unnamed source (url {:?})", source.url);
            steps.push(Step::Note("skipping unnamed source".to_string()));
            continue;
        }
        steps.push(Step::Fetch {
            url: source.url.clone(),
            branch: source.branch.clone(),
            dst: build.base_branch(&source.name),
        });
    }

    let dst = build.dst_branch();
    steps.push(Step::CopyBranch {
        src: SEED_BRANCH.to_string(),
        dst: dst.clone(),
    });

    for source in &manifest.sources {
        if source.name.is_empty() {
            continue;
        }
        let base = build.base_branch(&source.name);
        for (idx, mapping) in source.mapping.iter().enumerate() {
            let map = build.map_branch(&source.name, idx);
            let from = path::tree_rel(&path::clean(&mapping.from)).to_string();
            let to = path::tree_rel(&path::clean(&mapping.to)).to_string();

            steps.push(Step::CopyBranch {
                src: base.clone(),
                dst: map.clone(),
            });
            if !from.is_empty() {
                steps.push(Step::ExtractSubtree {
                    branch: map.clone(),
                    dir: from,
                });
            }
            if !to.is_empty() {
                steps.push(Step::RelocateTree {
                    branch: map.clone(),
                    dir: to,
                    staging: random_token(rng),
                });
            }
            steps.push(Step::MergeLayer {
                onto: dst.clone(),
                layer: map,
            });
        }
    }

    Plan {
        build: build.clone(),
        steps,
    }
}
