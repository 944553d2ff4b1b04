use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dashboard color scheme. Lives only for the process; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Night,
    Ocean,
    Forest,
}

impl Theme {
    /// light -> dark -> night -> ocean -> forest -> light
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Night,
            Self::Night => Self::Ocean,
            Self::Ocean => Self::Forest,
            Self::Forest => Self::Light,
        }
    }

    /// Label of the toggle, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.next() {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
            Self::Night => "Night Mode",
            Self::Ocean => "Ocean Mode",
            Self::Forest => "Forest Mode",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Night)
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "night" => Ok(Self::Night),
            "ocean" => Ok(Self::Ocean),
            "forest" => Ok(Self::Forest),
            other => Err(CoreError::UnknownVariant {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}
