//! Durable pagination cursor.
//!
//! The cursor marks the fetch frontier: the provider only returns plays
//! after it. It is read once at the start of a run and written once at the
//! end, so a crash in between re-fetches the same page on the next run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CursorFile {
    cursor: CursorState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CursorState {
    after: Option<String>,
}

/// File-backed store for the single `after` cursor.
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the persisted cursor. A missing file means no cursor has been
    /// set yet (first run); an unreadable or malformed file is an error.
    pub fn load(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No cursor file at {}, fetching from the beginning",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let file: CursorFile = serde_json::from_str(&content)?;
        Ok(file.cursor.after)
    }

    /// Persist a new cursor value, overwriting the previous one.
    pub fn save(&self, after: Option<&str>) -> Result<()> {
        let file = CursorFile {
            cursor: CursorState {
                after: after.map(str::to_string),
            },
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        info!("Saved cursor to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_first_run() {
        let dir = tempdir().unwrap();
        let store = CursorStore::new(dir.path().join("cursor.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = CursorStore::new(dir.path().join("cursor.json"));

        store.save(Some("1700000000000")).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("1700000000000"));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = CursorStore::new(dir.path().join("cursor.json"));

        store.save(Some("111")).unwrap();
        store.save(Some("222")).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("222"));
    }

    #[test]
    fn test_save_none_round_trips_to_null() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cursor.json");
        let store = CursorStore::new(&path);

        store.save(None).unwrap();
        assert_eq!(store.load().unwrap(), None);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"after\": null"));
    }

    #[test]
    fn test_malformed_cursor_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cursor.json");
        fs::write(&path, "not json").unwrap();

        let store = CursorStore::new(&path);
        assert!(store.load().is_err());
    }
}
