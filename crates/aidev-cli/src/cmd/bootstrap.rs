use aidev_core::scaffold::{self, WriteAction};
use aidev_core::sync::SyncAction;
use aidev_core::{installer, linker, paths, sync, token, Settings};
use anyhow::Context;

/// The full provisioning pipeline, strictly sequenced. Each step returns a
/// Result and the first error aborts the run — no rollback, the filesystem
/// keeps whatever the completed steps produced.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    println!("Bootstrapping AI workspace in: {}", settings.workspace.display());

    // 1. Sync the platform checkout to the pinned version
    let token = token::resolve_token();
    let action = sync::sync(settings, token.as_deref())
        .context("failed to sync platform repository")?;
    match action {
        SyncAction::Clone => println!(
            "  cloned:  {} @ {}",
            settings.platform_dir.display(),
            settings.platform_version
        ),
        SyncAction::Update => println!(
            "  updated: {} @ {}",
            settings.platform_dir.display(),
            settings.platform_version
        ),
    }

    // 2-3. Claude CLI install and agent linking, unless opted out
    if settings.skip_claude_setup {
        tracing::warn!("SKIP_CLAUDE_SETUP is set; skipping Claude CLI install and agent linking");
    } else {
        match installer::ensure_claude().context("failed to install Claude CLI")? {
            installer::InstallPlan::AlreadyPresent => println!("  exists:  claude"),
            installer::InstallPlan::Install(manager) => {
                println!("  installed: claude (via {})", manager.name());
            }
        }

        let report = linker::link_agents(&settings.platform_dir, &settings.workspace)
            .context("failed to link agents")?;
        for name in &report.agents {
            println!("  linked:  {}/{name}", paths::AGENT_LINKS_DIR);
        }
        if report.every_bundle {
            println!(
                "  linked:  {}/{}",
                paths::AGENT_LINKS_DIR,
                paths::EVERY_BUNDLE_DIR
            );
        }

        // Deliberate: plugin setup is optional and its failures are
        // discarded. It must never fail the bootstrap.
        linker::install_plugin_best_effort();
    }

    // 4. Scaffold documents, created once and never overwritten
    report_file(
        paths::AI_CONFIG_FILE,
        scaffold::materialize_ai_config(&settings.workspace)?,
    );
    report_file(
        paths::REPO_MAP_FILE,
        scaffold::materialize_repo_map(&settings.workspace)?,
    );
    match scaffold::materialize_workflow(&settings.workspace)? {
        WriteAction::Create => println!("  created: {}", paths::WORKFLOW_FILE),
        WriteAction::Keep => println!("  exists:  {}/", paths::WORKFLOWS_DIR),
    }

    // 5. Make the workspace itself a git repository if it isn't one
    if sync::ensure_workspace_repo(&settings.workspace)
        .context("failed to initialize workspace repository")?
    {
        println!("  initialized: git repository");
    }

    println!("\nWorkspace ready.");
    Ok(())
}

fn report_file(name: &str, action: WriteAction) {
    match action {
        WriteAction::Create => println!("  created: {name}"),
        WriteAction::Keep => println!("  exists:  {name}"),
    }
}
