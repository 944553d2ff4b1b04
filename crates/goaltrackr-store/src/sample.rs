//! The demo collection the dashboard starts with.

use crate::config::StoreConfig;
use crate::store::GoalStore;
use chrono::{DateTime, Duration, Utc};
use goaltrackr_core::id::GoalId;
use goaltrackr_core::model::{Collaborator, Comment, Goal, Priority, ProgressEntry, Role};

const PORTRAITS: &str = "https://randomuser.me/api/portraits";

fn comment(name: &str, text: &str, portrait: &str) -> Comment {
    Comment {
        name: name.into(),
        text: text.into(),
        avatar: format!("{}/{}.jpg", PORTRAITS, portrait),
    }
}

fn history(now: DateTime<Utc>, points: &[(i64, u8)]) -> Vec<ProgressEntry> {
    points
        .iter()
        .map(|&(days_ago, progress)| ProgressEntry {
            date: now - Duration::days(days_ago),
            progress,
        })
        .collect()
}

/// Three seeded goals: two completed, one at 60%.
pub fn sample_goals(now: DateTime<Utc>) -> Vec<Goal> {
    vec![
        Goal {
            id: GoalId::from("1"),
            title: "Launch Marketing Website".into(),
            description: "Design and publish the new marketing site for product awareness.".into(),
            progress: 100,
            category: Some("work".into()),
            tags: vec!["marketing".into(), "design".into()],
            priority: Some(Priority::High),
            due_date: Some(now + Duration::days(30)),
            depends_on: vec![],
            progress_history: history(now, &[(14, 30), (7, 60)]),
            shared_with: vec![
                Collaborator {
                    user_id: "101".into(),
                    email: "alice@example.com".into(),
                    role: Role::Editor,
                },
                Collaborator::viewer("102", "bob@example.com"),
            ],
            is_archived: false,
            comments: vec![
                comment("Alice", "This is progressing well. Nice work!", "women/44"),
                comment("Bob", "Can we update the hero image before launch?", "men/32"),
            ],
        },
        Goal {
            id: GoalId::from("2"),
            title: "Develop Mobile App MVP".into(),
            description: "Create the first version of our mobile app for testing.".into(),
            progress: 100,
            category: Some("development".into()),
            tags: vec!["mobile".into(), "react-native".into()],
            priority: Some(Priority::Medium),
            due_date: Some(now + Duration::days(60)),
            depends_on: vec![],
            progress_history: history(now, &[(21, 10), (14, 25)]),
            shared_with: vec![],
            is_archived: false,
            comments: vec![comment(
                "Carol",
                "I love the login animation! Let's keep refining.",
                "women/55",
            )],
        },
        Goal {
            id: GoalId::from("3"),
            title: "Software development".into(),
            description: "Create the first version of our Software.".into(),
            progress: 60,
            category: Some("development".into()),
            tags: vec!["mobile".into(), "react-native".into()],
            priority: Some(Priority::Medium),
            due_date: Some(now + Duration::days(60)),
            depends_on: vec![],
            progress_history: history(now, &[(21, 10), (14, 25)]),
            shared_with: vec![],
            is_archived: false,
            comments: vec![
                comment(
                    "Carol",
                    "I love the login animation! Let's keep refining.",
                    "women/55",
                ),
                comment("Bob", "Can we update the hero image before launch?", "men/32"),
            ],
        },
    ]
}

impl GoalStore {
    pub fn with_sample_goals(config: StoreConfig, now: DateTime<Utc>) -> Self {
        let mut store = Self::with_config(config);
        store.replace_all(sample_goals(now));
        store
    }
}
