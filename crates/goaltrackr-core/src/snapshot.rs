//! JSON snapshot of a whole goal collection, used for export and import.
//!
//! The format is a pretty-printed JSON array of goals. There is no version
//! field; any array of well-formed goal records is accepted as-is.

use crate::error::CoreError;
use crate::hash::SnapshotDigest;
use crate::model::{Goal, PROGRESS_COMPLETE};
use crate::serialize::content_digest;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const DEFAULT_EXPORT_PREFIX: &str = "goals";

/// Render the collection as a pretty-printed JSON array.
pub fn encode_snapshot(goals: &[Goal]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(goals)?)
}

/// Parse a snapshot. Nothing is returned unless every entry is well-formed.
pub fn decode_snapshot(text: &str) -> Result<Vec<Goal>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(CoreError::NotASequence),
    };

    let mut goals = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let goal: Goal = serde_json::from_value(entry).map_err(|e| CoreError::MalformedEntry {
            index,
            reason: e.to_string(),
        })?;
        check_progress(index, &goal)?;
        if !seen.insert(goal.id.clone()) {
            return Err(CoreError::DuplicateId(goal.id.to_string()));
        }
        goals.push(goal);
    }
    Ok(goals)
}

fn check_progress(index: usize, goal: &Goal) -> Result<(), CoreError> {
    let values = std::iter::once(goal.progress)
        .chain(goal.progress_history.iter().map(|e| e.progress));
    for value in values {
        if value > PROGRESS_COMPLETE {
            return Err(CoreError::ProgressOutOfRange { index, value });
        }
    }
    Ok(())
}

/// Digest of the collection, independent of JSON key order.
pub fn snapshot_digest(goals: &[Goal]) -> Result<SnapshotDigest, CoreError> {
    content_digest(&goals)
}

/// `<prefix>-YYYY-MM-DD.json`
pub fn export_file_name(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}.json", prefix, at.format("%Y-%m-%d"))
}
