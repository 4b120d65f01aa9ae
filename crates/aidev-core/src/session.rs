use crate::error::{AidevError, Result};
use crate::io;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Persisted agent session state.
///
/// An absent backing file is a fresh session, not an error: `load_or_default`
/// falls back to cleared storage. A file that exists but fails to parse is a
/// real error and is surfaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session ID to resume, when the last run saved one.
    #[serde(default)]
    pub resume_id: Option<String>,
    /// Arbitrary key/value storage carried between runs.
    #[serde(default)]
    pub storage: BTreeMap<String, String>,
}

impl SessionState {
    pub fn load_or_default(path: &Path) -> Result<SessionState> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|source| AidevError::CorruptSession {
                    path: path.display().to_string(),
                    source,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionState::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_vec_pretty(self)?;
        io::atomic_write(path, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_falls_back_to_cleared_state() {
        let dir = TempDir::new().unwrap();
        let state = SessionState::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(state, SessionState::default());
        assert!(state.storage.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session-state.json");
        let mut state = SessionState::default();
        state.resume_id = Some("sess-abc".into());
        state.storage.insert("auth".into(), "ok".into());
        state.save(&path).unwrap();
        assert_eq!(SessionState::load_or_default(&path).unwrap(), state);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session-state.json");
        std::fs::write(&path, "not json").unwrap();
        let err = SessionState::load_or_default(&path).unwrap_err();
        assert!(matches!(err, AidevError::CorruptSession { .. }));
    }
}
