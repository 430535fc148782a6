//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks an
//! `UPSTREAM` manifest without emitting a build script. Parsing strictness
//! matches the planner exactly: a manifest that validates will plan, and a
//! manifest that plans will validate.
//!
//! On top of the parse, the command lints for conditions the planner accepts
//! but that are almost certainly mistakes: unnamed sources, duplicate names,
//! missing or unparseable urls, and mappings that escape the tree root.
//! Lint findings are warnings; `--strict` turns them into a failing exit.
//! `--json` prints a machine-readable report instead of the human one.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use repoweave::manifest::{self, Manifest};
use repoweave::path;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the UPSTREAM manifest to check
    #[arg(short, long, value_name = "PATH", env = "REPOWEAVE_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Print a machine-readable JSON report
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs) -> Result<()> {
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| PathBuf::from(manifest::MANIFEST_PATH));

    if !manifest_path.exists() {
        anyhow::bail!("manifest not found: {}", manifest_path.display());
    }

    let manifest = manifest::load(&manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let warnings = lint(&manifest);

    if args.json {
        print_json_report(&manifest_path.display().to_string(), &manifest, &warnings);
    } else {
        print_report(&manifest_path.display().to_string(), &manifest, &warnings);
    }

    if args.strict && !warnings.is_empty() {
        anyhow::bail!("strict validation failed: {} warning(s)", warnings.len());
    }

    Ok(())
}

/// Collect lint warnings for conditions the planner would accept silently.
fn lint(manifest: &Manifest) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen_names = HashSet::new();

    for (idx, source) in manifest.sources.iter().enumerate() {
        if source.name.is_empty() {
            warnings.push(format!("source {} has no name and will be skipped", idx));
        } else if !seen_names.insert(source.name.clone()) {
            warnings.push(format!(
                "duplicate source name '{}'; its branches will overwrite the earlier source",
                source.name
            ));
        }

        if source.url.is_empty() {
            warnings.push(format!("source {} ({:?}) has no url", idx, source.name));
        } else if source.url.contains("://") && url::Url::parse(&source.url).is_err() {
            // scp-style remotes like git@host:path are fine, only lint
            // things that claim to be proper urls
            warnings.push(format!(
                "source {} ({:?}) has an unparseable url: {}",
                idx, source.name, source.url
            ));
        }

        for (midx, mapping) in source.mapping.iter().enumerate() {
            for (label, raw) in [("from", &mapping.from), ("to", &mapping.to)] {
                let rel = path::tree_rel(&path::clean(raw)).to_string();
                if rel == ".." || rel.starts_with("../") {
                    warnings.push(format!(
                        "mapping {} of source {:?} has a {} path escaping the tree: {}",
                        midx, source.name, label, raw
                    ));
                }
            }
        }
    }

    warnings
}

fn print_report(manifest_path: &str, manifest: &Manifest, warnings: &[String]) {
    println!("Validating manifest: {}", manifest_path);
    println!();
    println!("Sources: {}", manifest.sources.len());
    for source in &manifest.sources {
        let name = if source.name.is_empty() {
            "<unnamed>"
        } else {
            &source.name
        };
        println!(
            "  {} ({}) {}@{}, {} mapping(s)",
            name,
            source.owner,
            source.url,
            source.branch,
            source.mapping.len()
        );
    }

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in warnings {
            println!("  - {}", warning);
        }
    }

    println!();
    if warnings.is_empty() {
        println!("Manifest is valid");
    } else {
        println!("Manifest is valid ({} warning(s))", warnings.len());
    }
}

fn print_json_report(manifest_path: &str, manifest: &Manifest, warnings: &[String]) {
    let report = serde_json::json!({
        "manifest": manifest_path,
        "valid": true,
        "sources": manifest
            .sources
            .iter()
            .map(|source| serde_json::json!({
                "name": source.name,
                "owner": source.owner,
                "url": source.url,
                "branch": source.branch,
                "mappings": source.mapping.len(),
            }))
            .collect::<Vec<_>>(),
        "warnings": warnings,
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
