use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::query::{filter_goals, GoalFilter};
use crate::stats::{derive_statistics, Statistics};
use chrono::{DateTime, Utc};
use goaltrackr_core::hash::SnapshotDigest;
use goaltrackr_core::id::GoalId;
use goaltrackr_core::model::{
    normalize_tag, AvatarPool, Collaborator, Comment, Goal, GoalDraft, Role,
};
use goaltrackr_core::snapshot::{decode_snapshot, encode_snapshot, snapshot_digest};
use tracing::{debug, info, warn};

/// In-memory, insertion-ordered collection of goals.
///
/// Operations that target a goal by id return `false` when the id is unknown
/// and change nothing. Blank required input is rejected with an error and
/// also changes nothing.
pub struct GoalStore {
    goals: Vec<Goal>,
    config: StoreConfig,
    avatars: AvatarPool,
    last_issued: i64,
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            goals: Vec::new(),
            avatars: config.avatar_pool(),
            config,
            last_issued: 0,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    fn get_mut(&mut self, id: &GoalId) -> Option<&mut Goal> {
        let found = self.goals.iter_mut().find(|g| &g.id == id);
        if found.is_none() {
            debug!(goal_id = %id, "goal not found, ignoring");
        }
        found
    }

    /// Create a goal from a draft and append it. Returns the new id.
    pub fn add(&mut self, draft: GoalDraft) -> Result<GoalId, StoreError> {
        draft.validate()?;
        let now = Utc::now();
        let id = self.issue_id(now);
        let goal = draft.into_goal(id.clone(), now)?;
        debug!(goal_id = %id, title = %goal.title, "goal added");
        self.goals.push(goal);
        Ok(id)
    }

    /// Millisecond-timestamp id, bumped until it is unused.
    fn issue_id(&mut self, now: DateTime<Utc>) -> GoalId {
        let mut candidate = now.timestamp_millis().max(self.last_issued + 1);
        loop {
            let id = GoalId::new(candidate.to_string());
            if self.get(&id).is_none() {
                self.last_issued = candidate;
                return id;
            }
            candidate += 1;
        }
    }

    /// Set progress (clamped to 0..=100) and append one history entry.
    pub fn update_progress(&mut self, id: &GoalId, value: i64) -> bool {
        let Some(goal) = self.get_mut(id) else {
            return false;
        };
        let at = history_stamp(goal);
        let stored = goal.record_progress(value, at);
        debug!(goal_id = %id, progress = stored, "progress updated");
        true
    }

    /// Move progress by `delta` percentage points, as the ±10% buttons do.
    pub fn step_progress(&mut self, id: &GoalId, delta: i64) -> bool {
        let Some(current) = self.get(id).map(|g| g.progress) else {
            return false;
        };
        self.update_progress(id, (current as i64).saturating_add(delta))
    }

    /// Append a comment by `author` with an avatar picked from the pool.
    pub fn add_comment(
        &mut self,
        id: &GoalId,
        author: &str,
        text: &str,
    ) -> Result<bool, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::Validation("comment text must not be empty".into()));
        }
        let avatar = self.avatars.pick();
        let Some(goal) = self.get_mut(id) else {
            return Ok(false);
        };
        goal.comments.push(Comment {
            name: author.to_string(),
            text: text.to_string(),
            avatar,
        });
        debug!(goal_id = %id, author, "comment added");
        Ok(true)
    }

    /// Comment as the configured local author.
    pub fn post_comment(&mut self, id: &GoalId, text: &str) -> Result<bool, StoreError> {
        let author = self.config.comment_author.clone();
        self.add_comment(id, &author, text)
    }

    pub fn toggle_archive(&mut self, id: &GoalId) -> bool {
        let Some(goal) = self.get_mut(id) else {
            return false;
        };
        goal.is_archived = !goal.is_archived;
        debug!(goal_id = %id, archived = goal.is_archived, "archive toggled");
        true
    }

    /// Remove a goal for good. Other goals keep any `depends_on` entry for it.
    pub fn delete(&mut self, id: &GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| &g.id != id);
        let removed = self.goals.len() != before;
        if removed {
            debug!(goal_id = %id, "goal deleted");
        }
        removed
    }

    /// Share with `email` as a viewer. No format or duplicate checks.
    pub fn share_with(&mut self, id: &GoalId, email: &str) -> Result<bool, StoreError> {
        if email.trim().is_empty() {
            return Err(StoreError::Validation("email must not be empty".into()));
        }
        let user_id = Utc::now().timestamp_millis().to_string();
        let Some(goal) = self.get_mut(id) else {
            return Ok(false);
        };
        goal.shared_with.push(Collaborator::viewer(user_id, email));
        debug!(goal_id = %id, email, "collaborator added");
        Ok(true)
    }

    /// Remove the collaborator at `index`. Out-of-range indexes change nothing.
    pub fn unshare(&mut self, id: &GoalId, index: usize) -> bool {
        let Some(goal) = self.get_mut(id) else {
            return false;
        };
        if index >= goal.shared_with.len() {
            return false;
        }
        let removed = goal.shared_with.remove(index);
        debug!(goal_id = %id, email = %removed.email, "collaborator removed");
        true
    }

    pub fn set_role(&mut self, id: &GoalId, index: usize, role: Role) -> bool {
        let Some(collaborator) = self
            .get_mut(id)
            .and_then(|g| g.shared_with.get_mut(index))
        else {
            return false;
        };
        collaborator.role = role;
        true
    }

    /// Append a tag; commas are stripped and blank input ignored.
    pub fn add_tag(&mut self, id: &GoalId, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        let Some(goal) = self.get_mut(id) else {
            return false;
        };
        goal.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, id: &GoalId, index: usize) -> bool {
        match self.get_mut(id) {
            Some(goal) if index < goal.tags.len() => {
                goal.tags.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Goals this goal depends on. Ids with no matching goal are skipped.
    pub fn dependencies(&self, id: &GoalId) -> Vec<&Goal> {
        let Some(goal) = self.get(id) else {
            return Vec::new();
        };
        goal.depends_on
            .iter()
            .filter_map(|dep| self.get(dep))
            .collect()
    }

    pub fn overdue(&self, now: DateTime<Utc>) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.is_overdue(now)).collect()
    }

    pub fn filter(&self, filter: &GoalFilter) -> Vec<Goal> {
        filter_goals(&self.goals, filter)
    }

    pub fn statistics(&self) -> Statistics {
        derive_statistics(&self.goals)
    }

    pub fn export_snapshot(&self) -> Result<String, StoreError> {
        Ok(encode_snapshot(&self.goals)?)
    }

    pub fn digest(&self) -> Result<SnapshotDigest, StoreError> {
        Ok(snapshot_digest(&self.goals)?)
    }

    /// Replace the whole collection with a parsed snapshot.
    ///
    /// On error the current collection is left as it was. Asking the user to
    /// confirm the replacement is up to the caller.
    pub fn import_snapshot(&mut self, text: &str) -> Result<usize, StoreError> {
        match decode_snapshot(text) {
            Ok(goals) => Ok(self.replace_all(goals)),
            Err(e) => {
                warn!(error = %e, "snapshot import rejected");
                Err(e.into())
            }
        }
    }

    /// Swap in a new collection wholesale. Returns the new length.
    pub fn replace_all(&mut self, goals: Vec<Goal>) -> usize {
        info!(previous = self.goals.len(), count = goals.len(), "collection replaced");
        self.goals = goals;
        self.goals.len()
    }
}

/// Timestamp for a new history entry, never earlier than the last one.
fn history_stamp(goal: &Goal) -> DateTime<Utc> {
    let now = Utc::now();
    match goal.progress_history.last() {
        Some(last) if last.date > now => last.date,
        _ => now,
    }
}
