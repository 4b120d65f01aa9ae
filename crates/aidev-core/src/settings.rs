use crate::error::Result;
use crate::paths;
use std::path::PathBuf;

/// Resolved run configuration.
///
/// Built exactly once at startup from CLI flags and their env var bindings;
/// every component takes this by reference instead of reading the
/// environment itself.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Platform repository: an `owner/name` GitHub slug, a full URL, or a
    /// local path (URLs and paths pass through untouched).
    pub platform_repo: String,
    /// Branch or tag of the platform repository to check out.
    pub platform_version: String,
    /// Local platform checkout location.
    pub platform_dir: PathBuf,
    /// Root of the workspace being provisioned. Must already exist.
    pub workspace: PathBuf,
    /// Skip Claude CLI install and agent linking entirely.
    pub skip_claude_setup: bool,
}

impl Settings {
    pub fn resolve(
        platform_repo: String,
        platform_version: String,
        platform_dir: Option<PathBuf>,
        workspace: Option<PathBuf>,
        skip_claude_setup: bool,
    ) -> Result<Self> {
        let platform_dir = match platform_dir {
            Some(dir) => dir,
            None => paths::default_platform_dir()?,
        };
        let workspace = match workspace {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        Ok(Settings {
            platform_repo,
            platform_version,
            platform_dir,
            workspace,
            skip_claude_setup,
        })
    }
}

/// Flag-style env var parsing: `1`, `true`, and `yes` (case-insensitive)
/// are truthy, everything else is false.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
