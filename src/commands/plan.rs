//! Plan command implementation
//!
//! The plan command performs the whole single-pass pipeline:
//! 1. Load and parse the UPSTREAM manifest
//! 2. Mint (or accept) the build id scoping this run's branches
//! 3. Generate the ordered operation plan
//! 4. Render the plan as a shell script on stdout
//!
//! Nothing is executed; the generated script is the deliverable.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use repoweave::branch::BuildId;
use repoweave::{manifest, plan, script};

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the UPSTREAM manifest
    #[arg(short, long, value_name = "PATH", env = "REPOWEAVE_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Pin the build id instead of minting a random one (8 lowercase hex chars)
    #[arg(long, value_name = "HEX8")]
    pub build_id: Option<BuildId>,
}

/// Execute the plan command
pub fn execute(args: PlanArgs) -> Result<()> {
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| PathBuf::from(manifest::MANIFEST_PATH));

    if !manifest_path.exists() {
        anyhow::bail!("manifest not found: {}", manifest_path.display());
    }

    let manifest = manifest::load(&manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let build = args.build_id.unwrap_or_else(BuildId::random);
    let plan = plan::generate(&manifest, &build);
    print!("{}", script::render(&plan));

    Ok(())
}
