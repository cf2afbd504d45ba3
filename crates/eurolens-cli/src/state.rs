//! Small persisted state the CLI owns: the last-open timestamp the
//! engagement policy reads, and the set of analysis ids that already
//! received feedback (the caller-side dedup the feedback contract requires).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CliState {
    pub last_open: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_feedback: BTreeSet<i64>,
}

impl CliState {
    /// Loads the state file, starting fresh when it is missing or corrupt.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "state unreadable, starting fresh");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "state corrupt, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn round_trips_through_the_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = CliState::default();
        state.last_open = Some(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        state.submitted_feedback.insert(42);
        state.save(&path).unwrap();

        let reloaded = CliState::load(&path);
        assert_eq!(reloaded.last_open, state.last_open);
        assert!(reloaded.submitted_feedback.contains(&42));
    }

    #[test]
    fn missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let state = CliState::load(&dir.path().join("nope.json"));
        assert_eq!(state.last_open, None);
        assert!(state.submitted_feedback.is_empty());
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"{ nope").unwrap();
        let state = CliState::load(&path);
        assert_eq!(state.last_open, None);
    }
}
