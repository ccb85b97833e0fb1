//! Run checkpoint, read at start and overwritten at the end of every run.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Row offset the next run starts from.
    pub next_start_row: usize,
    #[serde(default)]
    pub last_run_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rows_processed_last_run: usize,
    #[serde(default)]
    pub rows_updated_last_run: usize,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            next_start_row: 0,
            last_run_utc: None,
            rows_processed_last_run: 0,
            rows_updated_last_run: 0,
        }
    }
}

impl RunState {
    /// A missing or unreadable checkpoint starts the table from row 0.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!(
                    "[STATE] Ignoring unreadable checkpoint {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_default() {
        let state = RunState::load(Path::new("/nonexistent/state.json"));
        assert_eq!(state.next_start_row, 0);
        assert!(state.last_run_utc.is_none());
    }

    #[test]
    fn corrupt_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();
        let state = RunState::load(&path);
        assert_eq!(state.next_start_row, 0);
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".state").join("state.json");

        let state = RunState {
            next_start_row: 42,
            last_run_utc: Some(Utc::now()),
            rows_processed_last_run: 100,
            rows_updated_last_run: 7,
        };
        state.save(&path).unwrap();

        let loaded = RunState::load(&path);
        assert_eq!(loaded.next_start_row, 42);
        assert_eq!(loaded.rows_processed_last_run, 100);
        assert_eq!(loaded.rows_updated_last_run, 7);
        assert!(loaded.last_run_utc.is_some());
    }

    #[test]
    fn tolerates_older_checkpoints_without_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"next_start_row": 10}"#).unwrap();
        let state = RunState::load(&path);
        assert_eq!(state.next_start_row, 10);
        assert_eq!(state.rows_updated_last_run, 0);
    }
}
