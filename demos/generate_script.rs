//! Example demonstrating manifest parsing and build plan generation
//!
//! Run with: cargo run --example generate_script

use repoweave::branch::BuildId;
use repoweave::{manifest, plan, script};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // In the real application, this would come from ./UPSTREAM
    let content = r#"
[[source]]
name = "docs"
owner = "docs-team"
url = "https://git.example.com/docs.git"
mapping = [["/", "/documentation"]]

[[source]]
name = "runtime"
url = "https://git.example.com/runtime.git"
branch = "release"
mapping = [["lib", "/vendor/lib"]]
"#;

    let parsed = manifest::parse(content)?;
    println!("Parsed {} sources:", parsed.sources.len());
    for source in &parsed.sources {
        println!("  - {} ({}@{})", source.name, source.url, source.branch);
    }

    // Pinned so the output stays stable; BuildId::random() is the
    // production path.
    let build: BuildId = "0a1b2c3d".parse()?;
    let generated = plan::generate(&parsed, &build);
    println!("\nPlanned {} steps for build {}", generated.steps.len(), build);

    println!("\n--- generated script ---");
    print!("{}", script::render(&generated));

    Ok(())
}
