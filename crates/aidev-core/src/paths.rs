use crate::error::{AidevError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Workspace layout constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const AGENT_LINKS_DIR: &str = ".claude/agents";
pub const SESSION_STATE_FILE: &str = ".claude/session-state.json";

pub const AI_CONFIG_FILE: &str = "ai.config.yaml";
pub const REPO_MAP_FILE: &str = "repo-map.yaml";
pub const WORKFLOWS_DIR: &str = ".github/workflows";
pub const WORKFLOW_FILE: &str = ".github/workflows/ai-check.yml";

// ---------------------------------------------------------------------------
// Platform checkout layout constants
// ---------------------------------------------------------------------------

/// Directory of individual agent definition files inside the checkout.
pub const PLATFORM_AGENTS_DIR: &str = "agents";
/// Optional agent bundle directory, linked wholesale under a fixed name.
pub const EVERY_BUNDLE_DIR: &str = "every";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn agent_links_dir(workspace: &Path) -> PathBuf {
    workspace.join(AGENT_LINKS_DIR)
}

pub fn session_state_path(workspace: &Path) -> PathBuf {
    workspace.join(SESSION_STATE_FILE)
}

pub fn ai_config_path(workspace: &Path) -> PathBuf {
    workspace.join(AI_CONFIG_FILE)
}

pub fn repo_map_path(workspace: &Path) -> PathBuf {
    workspace.join(REPO_MAP_FILE)
}

pub fn workflows_dir(workspace: &Path) -> PathBuf {
    workspace.join(WORKFLOWS_DIR)
}

pub fn workflow_path(workspace: &Path) -> PathBuf {
    workspace.join(WORKFLOW_FILE)
}

pub fn platform_agents_dir(checkout: &Path) -> PathBuf {
    checkout.join(PLATFORM_AGENTS_DIR)
}

pub fn every_bundle_dir(checkout: &Path) -> PathBuf {
    checkout.join(EVERY_BUNDLE_DIR)
}

// ---------------------------------------------------------------------------
// Home-relative defaults
// ---------------------------------------------------------------------------

/// Default location of the platform checkout when `PLATFORM_DIR` is unset.
pub fn default_platform_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(AidevError::HomeNotFound)?;
    Ok(home.join(".cache").join("aidev").join("platform"))
}

/// Fallback token file consulted when no token env var is set.
pub fn token_file_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(AidevError::HomeNotFound)?;
    Ok(home.join(".config").join("aidev").join("token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_path_helpers() {
        let ws = Path::new("/tmp/proj");
        assert_eq!(ai_config_path(ws), PathBuf::from("/tmp/proj/ai.config.yaml"));
        assert_eq!(
            workflow_path(ws),
            PathBuf::from("/tmp/proj/.github/workflows/ai-check.yml")
        );
        assert_eq!(
            agent_links_dir(ws),
            PathBuf::from("/tmp/proj/.claude/agents")
        );
    }

    #[test]
    fn checkout_path_helpers() {
        let co = Path::new("/tmp/platform");
        assert_eq!(platform_agents_dir(co), PathBuf::from("/tmp/platform/agents"));
        assert_eq!(every_bundle_dir(co), PathBuf::from("/tmp/platform/every"));
    }
}
