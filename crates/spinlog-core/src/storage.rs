//! Per-date partition records.
//!
//! Each calendar date gets one independent JSON file under the base
//! directory. There is no cross-date transaction: a crash mid-run can leave
//! some dates written and later ones not, and the next run re-delivers the
//! unpersisted ones because the cursor still points at the old frontier.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::history::PlayEvent;

/// All plays recorded for one calendar date, persisted as one unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partition {
    pub items: Vec<PlayEvent>,
}

/// File-per-date store under a base directory.
pub struct PartitionStore {
    base_dir: PathBuf,
}

impl PartitionStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Create the base directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }

    fn partition_path(&self, date: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", date))
    }

    /// Load the partition for `date`, or `None` if nothing has been
    /// recorded for that date yet.
    pub fn load(&self, date: &str) -> Result<Option<Partition>> {
        let content = match fs::read_to_string(self.partition_path(date)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Append `events` to the partition for `date`, keeping any previously
    /// recorded plays in front of them. Returns the number appended.
    pub fn append(&self, date: &str, events: Vec<PlayEvent>) -> Result<usize> {
        let appended = events.len();

        let mut partition = self.load(date)?.unwrap_or_default();
        partition.items.extend(events);

        let path = self.partition_path(date);
        fs::write(&path, serde_json::to_string_pretty(&partition)?)?;
        info!("Wrote {} items to {}", appended, path.display());

        Ok(appended)
    }
}
