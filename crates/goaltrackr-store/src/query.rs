//! Query functions for filtering goals

use goaltrackr_core::model::{Goal, Priority, PROGRESS_COMPLETE};

/// Dashboard filter bar. All predicates are ANDed.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalFilter {
    /// Case-insensitive substring of title or description; empty matches all.
    pub search_term: String,
    /// Exact category; `None` or empty matches all.
    pub category: Option<String>,
    pub progress_min: u8,
    pub progress_max: u8,
    pub priority: Option<Priority>,
    /// When false, archived goals are hidden.
    pub show_archived: bool,
}

impl Default for GoalFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            progress_min: 0,
            progress_max: PROGRESS_COMPLETE,
            priority: None,
            show_archived: false,
        }
    }
}

impl GoalFilter {
    /// Everything, archived goals included.
    pub fn all() -> Self {
        Self {
            show_archived: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, goal: &Goal) -> bool {
        if !self.search_term.is_empty() && !goal.matches_text(&self.search_term) {
            return false;
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if goal.category.as_deref() != Some(category) {
                return false;
            }
        }
        if goal.progress < self.progress_min || goal.progress > self.progress_max {
            return false;
        }
        if let Some(priority) = self.priority {
            if goal.priority != Some(priority) {
                return false;
            }
        }
        self.show_archived || !goal.is_archived
    }
}

/// Goals matching `filter`, in collection order. The source is not touched.
pub fn filter_goals(goals: &[Goal], filter: &GoalFilter) -> Vec<Goal> {
    goals.iter().filter(|g| filter.matches(g)).cloned().collect()
}
