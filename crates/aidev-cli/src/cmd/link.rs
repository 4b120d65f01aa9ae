use aidev_core::{linker, paths, Settings};
use anyhow::Context;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    if settings.skip_claude_setup {
        tracing::warn!("SKIP_CLAUDE_SETUP is set; skipping agent linking");
        return Ok(());
    }

    let report = linker::link_agents(&settings.platform_dir, &settings.workspace)
        .context("failed to link agents")?;
    for name in &report.agents {
        println!("linked {}/{name}", paths::AGENT_LINKS_DIR);
    }
    if report.every_bundle {
        println!(
            "linked {}/{}",
            paths::AGENT_LINKS_DIR,
            paths::EVERY_BUNDLE_DIR
        );
    }
    if report.agents.is_empty() && !report.every_bundle {
        println!("no agent definitions found in platform checkout");
    }

    // Deliberate: plugin setup is optional and its failures are discarded.
    linker::install_plugin_best_effort();
    Ok(())
}
