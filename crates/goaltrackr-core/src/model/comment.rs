use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://randomuser.me/api/portraits/lego";
pub const DEFAULT_AVATAR_POOL_SIZE: usize = 10;

/// A piece of feedback left on a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub name: String,
    pub text: String,
    pub avatar: String,
}

/// Fixed pool of portrait images; user-authored comments get a random one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPool {
    base_url: String,
    size: usize,
}

impl AvatarPool {
    pub fn new(base_url: impl Into<String>, size: usize) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            size: size.max(1),
        }
    }

    pub fn url(&self, index: usize) -> String {
        format!("{}/{}.jpg", self.base_url, index % self.size)
    }

    pub fn pick(&self) -> String {
        let index = rand::thread_rng().gen_range(0..self.size);
        self.url(index)
    }

    pub fn contains(&self, avatar: &str) -> bool {
        (0..self.size).any(|i| self.url(i) == avatar)
    }
}

impl Default for AvatarPool {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL, DEFAULT_AVATAR_POOL_SIZE)
    }
}
