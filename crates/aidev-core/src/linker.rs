//! Fan agent definitions out of the platform checkout as symbolic links.
//!
//! Links, not copies: a later `git pull` of the checkout updates agent
//! content without rerunning this step. The link set is rebuilt on every
//! run, so upstream renames are picked up; a removed upstream file leaves a
//! broken link behind only if its target disappears.

use crate::error::Result;
use crate::io;
use crate::paths;
use std::path::Path;
use std::process::{Command, Stdio};

pub const PLUGIN_MARKETPLACE: &str = "everyinc/every-marketplace";
pub const PLUGIN_NAME: &str = "every";

/// What the link step produced, for the orchestrator's summary.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// Basenames of agent files linked, in directory order (sorted).
    pub agents: Vec<String>,
    /// Whether the `every` bundle directory was linked.
    pub every_bundle: bool,
}

/// Link every `*.md` agent definition from the checkout into the
/// workspace's `.claude/agents/` directory, overwriting existing links.
/// A checkout without an `agents/` directory links nothing.
pub fn link_agents(checkout: &Path, workspace: &Path) -> Result<LinkReport> {
    let links_dir = paths::agent_links_dir(workspace);
    io::ensure_dir(&links_dir)?;

    let mut report = LinkReport::default();

    let agents_dir = paths::platform_agents_dir(checkout);
    if agents_dir.is_dir() {
        // Canonicalize so links stay valid regardless of how the checkout
        // path was spelled relative to the workspace.
        let agents_dir = std::fs::canonicalize(&agents_dir)?;
        let mut names: Vec<String> = std::fs::read_dir(&agents_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".md"))
            .collect();
        names.sort();
        for name in names {
            io::force_symlink(&agents_dir.join(&name), &links_dir.join(&name))?;
            report.agents.push(name);
        }
    }

    let bundle = paths::every_bundle_dir(checkout);
    if bundle.is_dir() {
        let bundle = std::fs::canonicalize(&bundle)?;
        io::force_symlink(&bundle, &links_dir.join(paths::EVERY_BUNDLE_DIR))?;
        report.every_bundle = true;
    }

    Ok(report)
}

/// Register the plugin marketplace and install the workflow plugin via the
/// Claude CLI. Best-effort by design: every failure is discarded and no
/// output is shown — plugin installation must never fail a bootstrap.
pub fn install_plugin_best_effort() {
    let _ = run_claude(&["plugin", "marketplace", "add", PLUGIN_MARKETPLACE]);
    let _ = run_claude(&["plugin", "install", PLUGIN_NAME]);
}

fn run_claude(args: &[&str]) -> std::io::Result<std::process::ExitStatus> {
    Command::new("claude")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
}
