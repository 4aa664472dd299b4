use std::path::PathBuf;

use thiserror::Error;

/// Failures while resolving and reading a dataset directory.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The user has no base directory in the configuration.
    #[error("no data directory configured for user '{user}'")]
    UnknownUser { user: String },

    #[error("dataset file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// The file exists but is not valid CSV.
    #[error("malformed CSV in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON")]
    Parse(#[from] serde_json::Error),
}
