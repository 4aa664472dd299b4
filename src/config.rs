//! Runtime configuration: which base directory belongs to which user.
//!
//! Nothing is compiled in. The map comes from a JSON file:
//!
//! ```json
//! {
//!   "default_user": "Brian",
//!   "users": { "Brian": "/data/quora-question-pairs" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Names the config file to read.
pub const CONFIG_ENV: &str = "QPAIRS_CONFIG";
/// Overrides `default_user`.
pub const USER_ENV: &str = "QPAIRS_USER";
/// Read from the working directory when `QPAIRS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "question-pairs.json";

fn default_user() -> String {
    "Brian".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// User selected when the binary runs.
    #[serde(default = "default_user")]
    pub default_user: String,
    /// User identifier → base directory holding the dataset files.
    #[serde(default)]
    pub users: BTreeMap<String, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_user: default_user(),
            users: BTreeMap::new(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Startup lookup: `$QPAIRS_CONFIG`, then `./question-pairs.json`, then
    /// an empty default. `$QPAIRS_USER` overrides the default user.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var(USER_ENV).ok(),
            Path::new(DEFAULT_CONFIG_FILE),
        )
    }

    fn load_from(
        explicit: Option<PathBuf>,
        user_override: Option<String>,
        fallback: &Path,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let (mut config, source) = match explicit {
            Some(path) => (Self::from_path(&path)?, ConfigSource::File(path)),
            None if fallback.is_file() => (
                Self::from_path(fallback)?,
                ConfigSource::File(fallback.to_path_buf()),
            ),
            None => (Self::default(), ConfigSource::Default),
        };

        if let Some(user) = user_override.filter(|u| !u.is_empty()) {
            config.default_user = user;
        }
        Ok((config, source))
    }

    /// Base directory for `user`, if one is configured.
    pub fn resolve(&self, user: &str) -> Option<&Path> {
        self.users.get(user).map(PathBuf::as_path)
    }

    /// Builder-style helper, mostly for tests and embedding.
    pub fn with_user(mut self, user: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.users.insert(user.into(), dir.into());
        self
    }
}
