//! Snapshot files: exporting the collection to disk and importing it back.

use crate::error::StoreError;
use crate::store::GoalStore;
use chrono::{DateTime, Utc};
use goaltrackr_core::hash::SnapshotDigest;
use goaltrackr_core::model::Goal;
use goaltrackr_core::snapshot::{decode_snapshot, encode_snapshot, export_file_name, snapshot_digest};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What an export wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub goal_count: usize,
    pub digest: SnapshotDigest,
}

/// Write `goals` to `<dir>/<prefix>-YYYY-MM-DD.json`.
///
/// Writes are atomic (temp file + rename); an export from the same day
/// replaces the earlier file.
pub fn write_export(
    dir: impl AsRef<Path>,
    prefix: &str,
    goals: &[Goal],
    at: DateTime<Utc>,
) -> Result<ExportReceipt, StoreError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(prefix, at));

    let text = encode_snapshot(goals)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.flush()?;
    tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

    let receipt = ExportReceipt {
        path,
        goal_count: goals.len(),
        digest: snapshot_digest(goals)?,
    };
    info!(
        path = %receipt.path.display(),
        count = receipt.goal_count,
        digest = %receipt.digest,
        "snapshot exported"
    );
    Ok(receipt)
}

/// A snapshot that has been read and parsed but not yet applied.
///
/// Reading and applying are separate steps: the store may keep changing in
/// between, and applying replaces whatever is there at that point.
#[derive(Debug, Clone)]
pub struct PendingImport {
    source: PathBuf,
    goals: Vec<Goal>,
}

impl PendingImport {
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of goals that will replace the collection.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Replace the store's collection. Returns the new length.
    pub fn apply(self, store: &mut GoalStore) -> usize {
        info!(path = %self.source.display(), count = self.goals.len(), "applying import");
        store.replace_all(self.goals)
    }
}

/// Read and parse a snapshot file without touching any store.
pub fn read_import(path: impl AsRef<Path>) -> Result<PendingImport, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let goals = decode_snapshot(&text).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to parse snapshot file");
        StoreError::Core(e)
    })?;
    Ok(PendingImport {
        source: path.to_path_buf(),
        goals,
    })
}

impl GoalStore {
    /// Export the collection into `dir` using the configured file prefix.
    pub fn export_to_dir(
        &self,
        dir: impl AsRef<Path>,
        at: DateTime<Utc>,
    ) -> Result<ExportReceipt, StoreError> {
        write_export(dir, &self.config().export_prefix, self.goals(), at)
    }
}
