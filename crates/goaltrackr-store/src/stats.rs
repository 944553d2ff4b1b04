//! Aggregate numbers shown on the dashboard.

use goaltrackr_core::model::Goal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Histogram key for goals without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Milestone badge earned from the number of completed goals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    GettingStarted,
    ConsistentAchiever,
    GoalCrusher,
}

impl Badge {
    /// Highest tier whose threshold `completed` reaches.
    pub fn for_completed(completed: usize) -> Option<Self> {
        match completed {
            n if n >= 5 => Some(Self::GoalCrusher),
            n if n >= 3 => Some(Self::ConsistentAchiever),
            n if n >= 1 => Some(Self::GettingStarted),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GettingStarted => "🥉 Getting Started",
            Self::ConsistentAchiever => "🥈 Consistent Achiever",
            Self::GoalCrusher => "🥇 Goal Crusher",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Percentage of goals completed, rounded.
    pub success_rate: u8,
    /// Mean progress, rounded.
    pub average_progress: u8,
    pub categories: BTreeMap<String, usize>,
    pub badge: Option<Badge>,
}

pub fn derive_statistics(goals: &[Goal]) -> Statistics {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.is_completed()).count();
    let in_progress = total - completed;

    let (success_rate, average_progress) = if total == 0 {
        (0, 0)
    } else {
        let sum: u64 = goals.iter().map(|g| g.progress as u64).sum();
        (
            rounded_percent(completed as f64 * 100.0 / total as f64),
            rounded_percent(sum as f64 / total as f64),
        )
    };

    let mut categories = BTreeMap::new();
    for goal in goals {
        let key = goal.category.as_deref().unwrap_or(UNCATEGORIZED);
        *categories.entry(key.to_string()).or_insert(0) += 1;
    }

    Statistics {
        total,
        completed,
        in_progress,
        success_rate,
        average_progress,
        categories,
        badge: Badge::for_completed(completed),
    }
}

fn rounded_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
