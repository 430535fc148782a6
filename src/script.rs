//! Shell-script rendering for build plans.
//!
//! Each step renders as a comment line naming the operation, the command
//! itself, and a blank separator line. The script carries `set -e`, so a
//! failing command aborts the run and leaves the partially built branches
//! behind for inspection under the build's branch prefix.

use crate::plan::{Plan, Step};

/// Renders the whole plan as a shell script.
pub fn render(plan: &Plan) -> String {
    let mut out = String::with_capacity(256 + plan.steps.len() * 160);
    out.push_str(&format!("# Starting build {}\nset -e\n", plan.build));
    for step in &plan.steps {
        out.push_str(&step_block(step));
    }
    out
}

/// Renders one step as its comment-plus-command block.
fn step_block(step: &Step) -> String {
    match step {
        Step::Note(text) => format!("# {}\n\n", text),

        Step::Fetch { url, branch, dst } => format!(
            "# fetch {}@{} -> {}\ngit fetch -f {} {}:{}\n\n",
            url, branch, dst, url, branch, dst
        ),

        Step::CopyBranch { src, dst } => format!(
            "# copy branch {} -> {}\n\
             {{ git branch -D '{}' 2>/dev/null || true; }} && git branch -f '{}' '{}'\n\n",
            src, dst, dst, dst, src
        ),

        // filter-branch insists on running from the repository root
        Step::ExtractSubtree { branch, dir } => format!(
            "# extract subtree '{}' on {}\n\
             (cd $(git rev-parse --show-toplevel) && git filter-branch -f --subdirectory-filter '{}' '{}')\n\n",
            dir, branch, dir, branch
        ),

        // The tree moves through the hidden staging directory so that `dir`
        // being a name that already exists at the root cannot make mv copy
        // the tree into itself.
        Step::RelocateTree {
            branch,
            dir,
            staging,
        } => format!(
            "# relocate tree under '{}' on {}\n\
             (\n\
             \tcd $(git rev-parse --show-toplevel) \\\n\
             \t&& git filter-branch -f --tree-filter \"mkdir .'{}' && mv * .'{}'/ && mkdir -p '{}' && mv .'{}'/* '{}'/ && rm -r .'{}'\" '{}'\n\
             )\n\n",
            dir, branch, staging, staging, dir, staging, dir, staging, branch
        ),

        // Merging the destination into the layer first (taking the layer's
        // side of every conflict) lets the second merge fast-forward, so the
        // destination ends up containing the layer's files verbatim. The
        // layer's rewritten upstream history shares no ancestor with the
        // destination, so the first merge must allow unrelated histories.
        Step::MergeLayer { onto, layer } => format!(
            "# layer {} onto {}\n\
             git checkout '{}' && git merge --allow-unrelated-histories -X ours '{}' \
             && git checkout '{}' && git merge '{}'\n\n",
            layer, onto, layer, onto, onto, layer
        ),
    }
}
