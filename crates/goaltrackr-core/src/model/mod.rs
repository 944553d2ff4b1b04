pub mod collaborator;
pub mod comment;
pub mod draft;
pub mod goal;
pub mod template;
pub mod theme;

pub use collaborator::{Collaborator, Role};
pub use comment::{AvatarPool, Comment};
pub use draft::GoalDraft;
pub use goal::{clamp_progress, normalize_tag, Goal, Priority, ProgressEntry, PROGRESS_COMPLETE};
pub use template::{GoalTemplate, BUILTIN_TEMPLATES};
pub use theme::Theme;
