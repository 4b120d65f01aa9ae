use aidev_core::sync::SyncAction;
use aidev_core::{sync, token, Settings};
use anyhow::Context;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let token = token::resolve_token();
    let action = sync::sync(settings, token.as_deref())
        .context("failed to sync platform repository")?;
    match action {
        SyncAction::Clone => println!(
            "cloned {} @ {}",
            settings.platform_dir.display(),
            settings.platform_version
        ),
        SyncAction::Update => println!(
            "updated {} @ {}",
            settings.platform_dir.display(),
            settings.platform_version
        ),
    }
    Ok(())
}
