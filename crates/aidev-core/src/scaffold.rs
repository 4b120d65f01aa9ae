//! One-shot scaffold documents: written with default content when absent,
//! never touched again. User edits survive every later bootstrap.

use crate::error::Result;
use crate::io;
use crate::paths;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Keep,
}

/// Decide whether a scaffold target needs writing. Pure, so the
/// create-if-absent policy is testable without a filesystem.
pub fn plan_write(exists: bool) -> WriteAction {
    if exists {
        WriteAction::Keep
    } else {
        WriteAction::Create
    }
}

/// `ai.config.yaml` — gated on the file's existence.
pub fn materialize_ai_config(workspace: &Path) -> Result<WriteAction> {
    let path = paths::ai_config_path(workspace);
    let action = plan_write(path.exists());
    if action == WriteAction::Create {
        io::atomic_write(&path, AI_CONFIG_DEFAULT.as_bytes())?;
    }
    Ok(action)
}

/// `repo-map.yaml` — gated on the file's existence.
pub fn materialize_repo_map(workspace: &Path) -> Result<WriteAction> {
    let path = paths::repo_map_path(workspace);
    let action = plan_write(path.exists());
    if action == WriteAction::Create {
        io::atomic_write(&path, REPO_MAP_DEFAULT.as_bytes())?;
    }
    Ok(action)
}

/// `.github/workflows/ai-check.yml` — gated on the workflows *directory's*
/// existence, not the file's. A workspace that already has workflows is
/// assumed to manage its own CI.
pub fn materialize_workflow(workspace: &Path) -> Result<WriteAction> {
    let dir = paths::workflows_dir(workspace);
    let action = plan_write(dir.exists());
    if action == WriteAction::Create {
        io::atomic_write(&paths::workflow_path(workspace), AI_CHECK_WORKFLOW.as_bytes())?;
    }
    Ok(action)
}

pub const AI_CONFIG_DEFAULT: &str = "\
# aidev workspace configuration.
# Edit freely; bootstrap never overwrites this file.
version: 1
model: claude-sonnet-4-5
review:
  enabled: true
  auto_fix: false
paths:
  repo_map: repo-map.yaml
  agents: .claude/agents
";

pub const REPO_MAP_DEFAULT: &str = "\
# Repository structure map consumed by AI agents.
# Describe each top-level directory so agents know where code lives.
directories: []
services: []
";

pub const AI_CHECK_WORKFLOW: &str = "\
name: ai-check
on:
  pull_request:
jobs:
  ai-check:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Run AI checks
        run: |
          echo \"AI checks are configured in ai.config.yaml\"
";

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn plan_is_create_only_when_absent() {
        assert_eq!(plan_write(false), WriteAction::Create);
        assert_eq!(plan_write(true), WriteAction::Keep);
    }

    #[test]
    fn ai_config_written_once() {
        let ws = TempDir::new().unwrap();
        assert_eq!(
            materialize_ai_config(ws.path()).unwrap(),
            WriteAction::Create
        );
        assert_eq!(materialize_ai_config(ws.path()).unwrap(), WriteAction::Keep);
        assert_eq!(
            std::fs::read_to_string(ws.path().join("ai.config.yaml")).unwrap(),
            AI_CONFIG_DEFAULT
        );
    }

    #[test]
    fn user_edits_survive() {
        let ws = TempDir::new().unwrap();
        std::fs::write(ws.path().join("ai.config.yaml"), "custom: true\n").unwrap();
        assert_eq!(materialize_ai_config(ws.path()).unwrap(), WriteAction::Keep);
        assert_eq!(
            std::fs::read_to_string(ws.path().join("ai.config.yaml")).unwrap(),
            "custom: true\n"
        );
    }

    #[test]
    fn repo_map_written_once() {
        let ws = TempDir::new().unwrap();
        assert_eq!(materialize_repo_map(ws.path()).unwrap(), WriteAction::Create);
        assert_eq!(materialize_repo_map(ws.path()).unwrap(), WriteAction::Keep);
    }

    #[test]
    fn workflow_gated_on_directory() {
        let ws = TempDir::new().unwrap();
        // Pre-existing workflows dir suppresses the file entirely.
        std::fs::create_dir_all(ws.path().join(".github/workflows")).unwrap();
        assert_eq!(materialize_workflow(ws.path()).unwrap(), WriteAction::Keep);
        assert!(!ws.path().join(".github/workflows/ai-check.yml").exists());
    }

    #[test]
    fn workflow_created_with_directory() {
        let ws = TempDir::new().unwrap();
        assert_eq!(materialize_workflow(ws.path()).unwrap(), WriteAction::Create);
        assert!(ws.path().join(".github/workflows/ai-check.yml").exists());
    }

    #[test]
    fn default_documents_are_valid_yaml() {
        for doc in [AI_CONFIG_DEFAULT, REPO_MAP_DEFAULT, AI_CHECK_WORKFLOW] {
            serde_yaml::from_str::<serde_yaml::Value>(doc).unwrap();
        }
    }
}
