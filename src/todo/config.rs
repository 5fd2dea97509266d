use std::path::PathBuf;

use figment::{providers::Serialized, Figment};
use serde::{Deserialize, Serialize};

use crate::config::{merge_raw_env, ConfigError};

pub const DEFAULT_FILENAME: &str = ".todo.json";

/// Where the task list lives.
///
/// Resolved once at startup: the built-in default, replaced by
/// `TODO_FILENAME` when that variable is set and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoConfig {
    pub filename: PathBuf,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from(DEFAULT_FILENAME),
        }
    }
}

impl TodoConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment().extract()?;
        if config.filename.as_os_str().is_empty() {
            config.filename = PathBuf::from(DEFAULT_FILENAME);
        }
        Ok(config)
    }

    pub fn figment() -> Figment {
        merge_raw_env(
            Figment::from(Serialized::defaults(Self::default())),
            "TODO_FILENAME",
            "filename",
        )
    }
}
