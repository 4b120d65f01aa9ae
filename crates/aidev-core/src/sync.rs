//! Platform repository sync: clone on first run, fast-forward afterwards.
//!
//! Known gap, inherited from the original procedure: a directory left behind
//! by a run that crashed mid-clone is treated as an existing checkout and
//! fails at the fetch step. No recovery is attempted.

use crate::error::{AidevError, Result};
use crate::io;
use crate::settings::Settings;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Clone,
    Update,
}

/// Decide how to sync based only on whether the checkout directory exists.
pub fn plan(checkout_exists: bool) -> SyncAction {
    if checkout_exists {
        SyncAction::Update
    } else {
        SyncAction::Clone
    }
}

/// Build the clone URL for a platform repository identifier.
///
/// Full URLs and local paths pass through untouched (the token is never
/// embedded in them). A bare `owner/name` slug becomes a GitHub https URL,
/// with the token embedded when one is available.
pub fn remote_url(repo: &str, token: Option<&str>) -> String {
    if repo.contains("://") || repo.starts_with('/') || repo.starts_with('.') {
        return repo.to_string();
    }
    match token {
        Some(token) => format!("https://{token}@github.com/{repo}.git"),
        None => format!("https://github.com/{repo}.git"),
    }
}

/// Ensure `settings.platform_dir` holds a checkout of the platform
/// repository at the pinned version. Fatal on any git failure — a broken
/// checkout makes everything downstream meaningless.
pub fn sync(settings: &Settings, token: Option<&str>) -> Result<SyncAction> {
    let dir = &settings.platform_dir;
    let version = settings.platform_version.as_str();
    let action = plan(dir.exists());
    match action {
        SyncAction::Clone => {
            if let Some(parent) = dir.parent() {
                io::ensure_dir(parent)?;
            }
            let url = remote_url(&settings.platform_repo, token);
            let dir_arg = dir.display().to_string();
            run_git(None, &["clone", &url, &dir_arg])?;
            run_git(Some(dir), &["checkout", version])?;
        }
        SyncAction::Update => {
            run_git(Some(dir), &["fetch", "origin"])?;
            run_git(Some(dir), &["checkout", version])?;
            run_git(Some(dir), &["pull", "origin", version])?;
        }
    }
    Ok(action)
}

/// Initialize a git repository in the workspace if `.git/` is absent.
/// Returns true if a repository was created.
pub fn ensure_workspace_repo(workspace: &Path) -> Result<bool> {
    if workspace.join(".git").is_dir() {
        return Ok(false);
    }
    run_git(Some(workspace), &["init"])?;
    Ok(true)
}

/// Run a git subcommand, streaming its output through to the user.
/// The error message names only the subcommand, never the full argument
/// list, so an embedded token can't leak into logs.
fn run_git(dir: Option<&Path>, args: &[&str]) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let status = cmd.status().map_err(|e| AidevError::CommandFailed {
        program: "git".into(),
        subcommand: args.first().unwrap_or(&"").to_string(),
        detail: e.to_string(),
    })?;
    if !status.success() {
        return Err(AidevError::CommandFailed {
            program: "git".into(),
            subcommand: args.first().unwrap_or(&"").to_string(),
            detail: format!("exited with {status}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_clones_when_absent() {
        assert_eq!(plan(false), SyncAction::Clone);
    }

    #[test]
    fn plan_updates_when_present() {
        assert_eq!(plan(true), SyncAction::Update);
    }

    #[test]
    fn slug_becomes_github_url() {
        assert_eq!(
            remote_url("acme/platform", None),
            "https://github.com/acme/platform.git"
        );
    }

    #[test]
    fn token_is_embedded_in_slug_url() {
        assert_eq!(
            remote_url("acme/platform", Some("tok123")),
            "https://tok123@github.com/acme/platform.git"
        );
    }

    #[test]
    fn urls_and_paths_pass_through() {
        for repo in [
            "https://example.com/x.git",
            "ssh://git@host/x.git",
            "/srv/repos/platform",
            "./local-platform",
        ] {
            assert_eq!(remote_url(repo, Some("tok")), repo);
        }
    }
}
