use crate::paths;
use std::path::PathBuf;

/// Primary token env var, set by aidev-aware environments.
pub const TOKEN_ENV_PRIMARY: &str = "AIDEV_GITHUB_TOKEN";
/// Secondary env var, shared with other GitHub tooling.
pub const TOKEN_ENV_FALLBACK: &str = "GITHUB_TOKEN";

/// Resolve a GitHub access token, first non-empty source wins:
/// `AIDEV_GITHUB_TOKEN`, then `GITHUB_TOKEN`, then `~/.config/aidev/token`.
///
/// Returns `None` when no source is set — callers treat that as anonymous
/// access, not an error.
pub fn resolve_token() -> Option<String> {
    resolve_token_with(
        |key| std::env::var(key).ok(),
        paths::token_file_path().ok(),
    )
}

fn resolve_token_with(
    env: impl Fn(&str) -> Option<String>,
    token_file: Option<PathBuf>,
) -> Option<String> {
    for key in [TOKEN_ENV_PRIMARY, TOKEN_ENV_FALLBACK] {
        if let Some(value) = env(key) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    let path = token_file?;
    let content = std::fs::read_to_string(path).ok()?;
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn primary_env_wins() {
        let token = resolve_token_with(
            |key| match key {
                TOKEN_ENV_PRIMARY => Some("aaa".into()),
                TOKEN_ENV_FALLBACK => Some("bbb".into()),
                _ => None,
            },
            None,
        );
        assert_eq!(token, Some("aaa".into()));
    }

    #[test]
    fn fallback_env_when_primary_empty() {
        let token = resolve_token_with(
            |key| match key {
                TOKEN_ENV_PRIMARY => Some("  ".into()),
                TOKEN_ENV_FALLBACK => Some("bbb".into()),
                _ => None,
            },
            None,
        );
        assert_eq!(token, Some("bbb".into()));
    }

    #[test]
    fn token_file_is_last_resort() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("token");
        std::fs::write(&file, "from-file\n").unwrap();
        let token = resolve_token_with(|_| None, Some(file));
        assert_eq!(token, Some("from-file".into()));
    }

    #[test]
    fn no_sources_means_anonymous() {
        let token = resolve_token_with(|_| None, None);
        assert_eq!(token, None);
    }

    #[test]
    fn absent_token_file_means_anonymous() {
        let dir = TempDir::new().unwrap();
        let token = resolve_token_with(|_| None, Some(dir.path().join("missing")));
        assert_eq!(token, None);
    }
}
