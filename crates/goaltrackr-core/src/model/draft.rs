use crate::error::CoreError;
use crate::id::GoalId;
use crate::model::goal::{clamp_progress, normalize_tag, Goal, Priority, ProgressEntry};
use chrono::{DateTime, Utc};

/// The add-goal form before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    /// Clamped when the goal is created.
    pub progress: i64,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub depends_on: Vec<GoalId>,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            progress: 0,
            category: Some("work".into()),
            tags: Vec::new(),
            priority: Some(Priority::Medium),
            due_date: None,
            depends_on: Vec::new(),
        }
    }
}

impl GoalDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a tag from raw input; commas are stripped and blank input ignored.
    pub fn push_tag(&mut self, raw: &str) -> bool {
        match normalize_tag(raw) {
            Some(tag) => {
                self.tags.push(tag);
                true
            }
            None => false,
        }
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Title and description must be non-blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "description must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build a fresh goal with its history seeded at `now`.
    pub fn into_goal(self, id: GoalId, now: DateTime<Utc>) -> Result<Goal, CoreError> {
        self.validate()?;
        let progress = clamp_progress(self.progress);
        Ok(Goal {
            id,
            title: self.title,
            description: self.description,
            progress,
            category: self.category,
            tags: self.tags,
            priority: self.priority,
            due_date: self.due_date,
            depends_on: self.depends_on,
            progress_history: vec![ProgressEntry {
                date: now,
                progress,
            }],
            shared_with: Vec::new(),
            is_archived: false,
            comments: Vec::new(),
        })
    }
}
