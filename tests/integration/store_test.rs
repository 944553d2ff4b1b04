use chrono::{Duration, Utc};
use goaltrackr_core::id::GoalId;
use goaltrackr_core::model::{GoalDraft, GoalTemplate, Priority, Role, Theme, BUILTIN_TEMPLATES};
use goaltrackr_store::config::{StoreConfig, AUTHOR_ENV};
use goaltrackr_store::query::GoalFilter;
use goaltrackr_store::snapshot::read_import;
use goaltrackr_store::stats::Badge;
use goaltrackr_store::store::GoalStore;
use tempfile::TempDir;

fn draft(title: &str, category: &str, priority: Priority) -> GoalDraft {
    let mut d = GoalDraft::new(title, format!("{} in detail", title));
    d.category = Some(category.into());
    d.priority = Some(priority);
    d
}

#[test]
fn full_goal_lifecycle() {
    let mut store = GoalStore::new();
    let id = store
        .add(draft("Learn Rust", "learning", Priority::High))
        .unwrap();

    store.update_progress(&id, 30);
    store.step_progress(&id, 10);
    store.add_tag(&id, "systems");
    store.share_with(&id, "mentor@example.com").unwrap();
    store.set_role(&id, 0, Role::Editor);
    store.post_comment(&id, "Chapter 4 done").unwrap();
    store.toggle_archive(&id);

    let goal = store.get(&id).unwrap();
    assert_eq!(goal.progress, 40);
    let history: Vec<u8> = goal.progress_history.iter().map(|e| e.progress).collect();
    assert_eq!(history, vec![0, 30, 40]);
    assert_eq!(goal.tags, vec!["systems"]);
    assert_eq!(goal.shared_with[0].role, Role::Editor);
    assert_eq!(goal.comments.len(), 1);
    assert!(goal.is_archived);

    assert!(store.filter(&GoalFilter::default()).is_empty());
    assert_eq!(store.filter(&GoalFilter::all()).len(), 1);

    assert!(store.delete(&id));
    assert!(store.is_empty());
}

#[test]
fn deleted_goal_never_resurfaces() {
    let mut store = GoalStore::new();
    let base = store.add(draft("Base", "work", Priority::Low)).unwrap();
    let mut dependent = draft("Dependent", "work", Priority::Low);
    dependent.depends_on = vec![base.clone(), GoalId::from("never-existed")];
    let dep_id = store.add(dependent).unwrap();

    store.toggle_archive(&base);
    store.delete(&base);

    let visible = store.filter(&GoalFilter::all());
    assert!(visible.iter().all(|g| g.id != base));
    assert!(store.dependencies(&dep_id).is_empty());
    assert_eq!(store.get(&dep_id).unwrap().depends_on.len(), 2);
}

#[test]
fn filter_bar_combinations() {
    let mut store = GoalStore::new();
    store.add(draft("Quarterly report", "work", Priority::High)).unwrap();
    store.add(draft("Morning run", "health", Priority::Medium)).unwrap();
    let reading = store.add(draft("Reading list", "learning", Priority::Low)).unwrap();
    store.update_progress(&reading, 80);

    let filter = GoalFilter {
        search_term: "RUN".into(),
        ..GoalFilter::default()
    };
    let found = store.filter(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Morning run");

    let filter = GoalFilter {
        progress_min: 50,
        ..GoalFilter::default()
    };
    assert_eq!(store.filter(&filter)[0].id, reading);

    let filter = GoalFilter {
        category: Some("work".into()),
        priority: Some(Priority::Low),
        ..GoalFilter::default()
    };
    assert!(store.filter(&filter).is_empty());
    assert_eq!(store.len(), 3);
}

#[test]
fn statistics_follow_progress() {
    let mut store = GoalStore::new();
    let stats = store.statistics();
    assert_eq!((stats.success_rate, stats.average_progress), (0, 0));
    assert_eq!(stats.badge, None);

    let mut ids = Vec::new();
    for template in &BUILTIN_TEMPLATES {
        ids.push(store.add(template.draft()).unwrap());
    }
    for id in &ids {
        store.update_progress(id, 100);
    }
    let stats = store.statistics();
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.success_rate, 100);
    assert_eq!(stats.badge, Some(Badge::ConsistentAchiever));
    assert_eq!(stats.categories.len(), 3);

    store.update_progress(&ids[0], 40);
    let stats = store.statistics();
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.average_progress, 80);
}

#[test]
fn export_import_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let now = Utc::now();
    let mut store = GoalStore::with_sample_goals(StoreConfig::default(), now);
    let mut d = draft("Due soon", "personal", Priority::High);
    d.due_date = Some(now + Duration::days(3));
    d.depends_on = vec![GoalId::from("1")];
    let id = store.add(d).unwrap();
    store.post_comment(&id, "On it").unwrap();

    let receipt = store.export_to_dir(dir.path(), now).unwrap();
    let name = receipt.path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("goals-") && name.ends_with(".json"));

    let mut restored = GoalStore::new();
    read_import(&receipt.path).unwrap().apply(&mut restored);
    assert_eq!(restored.goals(), store.goals());
    assert_eq!(restored.digest().unwrap(), receipt.digest);
    assert_eq!(restored.dependencies(&id)[0].title, "Launch Marketing Website");
}

#[test]
fn rejected_import_reports_parse_error() {
    let mut store = GoalStore::with_sample_goals(StoreConfig::default(), Utc::now());
    let before = store.digest().unwrap();
    for payload in [r#"{"id":"1"}"#, "3.5", "\"goals\"", "[1, 2]"] {
        let err = store.import_snapshot(payload).unwrap_err();
        assert!(err.is_parse_error());
    }
    assert_eq!(store.digest().unwrap(), before);
    assert_eq!(store.len(), 3);
}

#[test]
fn template_prefill_then_edit() {
    let template = GoalTemplate::find("Learn New Skill").unwrap();
    let mut d = template.draft();
    d.push_tag("rust,");
    d.due_date = Some(Utc::now() - Duration::days(1));

    let mut store = GoalStore::new();
    let id = store.add(d).unwrap();
    let goal = store.get(&id).unwrap();
    assert_eq!(goal.tags, vec!["education", "growth", "rust"]);
    assert_eq!(store.overdue(Utc::now()).len(), 1);
}

#[test]
fn author_from_environment() {
    std::env::set_var(AUTHOR_ENV, "  Priya ");
    let config = StoreConfig::from_env();
    std::env::remove_var(AUTHOR_ENV);
    assert_eq!(config.comment_author, "Priya");

    let mut store = GoalStore::with_config(config);
    let id = store.add(GoalDraft::new("Write", "Blog post")).unwrap();
    store.post_comment(&id, "draft ready").unwrap();
    let comment = &store.get(&id).unwrap().comments[0];
    assert_eq!(comment.name, "Priya");
    assert!(!comment.avatar.is_empty());
}

#[test]
fn theme_toggle_cycles() {
    let mut theme = Theme::default();
    let mut labels = Vec::new();
    for _ in 0..5 {
        labels.push(theme.toggle_label());
        theme = theme.next();
    }
    assert_eq!(theme, Theme::Light);
    assert_eq!(
        labels,
        vec!["Dark Mode", "Night Mode", "Ocean Mode", "Forest Mode", "Light Mode"]
    );
}
