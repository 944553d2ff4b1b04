use goaltrackr_core::model::comment::{DEFAULT_AVATAR_BASE_URL, DEFAULT_AVATAR_POOL_SIZE};
use goaltrackr_core::model::AvatarPool;
use goaltrackr_core::snapshot::DEFAULT_EXPORT_PREFIX;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable naming the author of comments posted through the store.
pub const AUTHOR_ENV: &str = "GOALTRACKR_AUTHOR_NAME";

/// Runtime settings for a [`GoalStore`](crate::store::GoalStore). Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name recorded on comments posted by the local user.
    pub comment_author: String,
    pub avatar_base_url: String,
    pub avatar_pool_size: usize,
    /// File name prefix for exports (`<prefix>-YYYY-MM-DD.json`).
    pub export_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            comment_author: "You".into(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.into(),
            avatar_pool_size: DEFAULT_AVATAR_POOL_SIZE,
            export_prefix: DEFAULT_EXPORT_PREFIX.into(),
        }
    }
}

impl StoreConfig {
    /// Defaults, with the comment author taken from `GOALTRACKR_AUTHOR_NAME` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = env::var(AUTHOR_ENV) {
            if !name.trim().is_empty() {
                config.comment_author = name.trim().to_string();
            }
        }
        config
    }

    pub fn avatar_pool(&self) -> AvatarPool {
        AvatarPool::new(&self.avatar_base_url, self.avatar_pool_size)
    }
}
