use crate::error::CoreError;
use crate::id::GoalId;
use crate::model::collaborator::Collaborator;
use crate::model::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest progress value; a goal at this value counts as completed.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Clamp an arbitrary progress value into `0..=100`.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, PROGRESS_COMPLETE as i64) as u8
}

/// Tag from raw user input: trimmed, commas stripped. `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.replace(',', "");
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::UnknownVariant {
                kind: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// One snapshot in a goal's progress history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    pub date: DateTime<Utc>,
    pub progress: u8,
}

/// A trackable objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Ids of other goals; never validated, may dangle.
    #[serde(default)]
    pub depends_on: Vec<GoalId>,
    /// Append-only.
    #[serde(default)]
    pub progress_history: Vec<ProgressEntry>,
    #[serde(default)]
    pub shared_with: Vec<Collaborator>,
    #[serde(default)]
    pub is_archived: bool,
    /// Append-only.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.progress >= PROGRESS_COMPLETE
    }

    /// Past its due date and not yet completed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && !self.is_completed(),
            None => false,
        }
    }

    /// Set progress (clamped) and append a history entry stamped `at`.
    ///
    /// Always appends, even when the value does not change.
    pub fn record_progress(&mut self, value: i64, at: DateTime<Utc>) -> u8 {
        let progress = clamp_progress(value);
        self.progress = progress;
        self.progress_history.push(ProgressEntry { date: at, progress });
        progress
    }

    /// Progress history newest-first, for display.
    pub fn timeline(&self) -> Vec<ProgressEntry> {
        let mut entries = self.progress_history.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Case-insensitive substring match against title or description.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
