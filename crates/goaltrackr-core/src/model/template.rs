use crate::model::draft::GoalDraft;

/// A canned starting point for the add-goal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub progress: i64,
}

pub static BUILTIN_TEMPLATES: [GoalTemplate; 3] = [
    GoalTemplate {
        name: "Learn New Skill",
        description: "3-month learning plan with milestones",
        category: "learning",
        tags: &["education", "growth"],
        progress: 0,
    },
    GoalTemplate {
        name: "Fitness Challenge",
        description: "12-week fitness program",
        category: "health",
        tags: &["exercise", "wellness"],
        progress: 0,
    },
    GoalTemplate {
        name: "Work Project",
        description: "Complete major work initiative",
        category: "work",
        tags: &["professional", "career"],
        progress: 0,
    },
];

impl GoalTemplate {
    pub fn find(name: &str) -> Option<&'static GoalTemplate> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Prefill a draft. Priority, due date and dependencies are left alone.
    pub fn apply(&self, draft: &mut GoalDraft) {
        draft.title = self.name.to_string();
        draft.description = self.description.to_string();
        draft.category = Some(self.category.to_string());
        draft.tags = self.tags.iter().map(|t| t.to_string()).collect();
        draft.progress = self.progress;
    }

    pub fn draft(&self) -> GoalDraft {
        let mut draft = GoalDraft::default();
        self.apply(&mut draft);
        draft
    }
}
