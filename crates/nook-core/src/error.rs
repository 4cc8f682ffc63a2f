//! Error types for the nook extension.

use std::time::Duration;
use thiserror::Error;

/// Search adapter failures - rendered to the user as an error item.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The indexer command could not be started or waited on.
    #[error("failed to run tracker3: {0}")]
    Spawn(#[from] std::io::Error),

    /// The indexer exited with a non-zero status.
    #[error("tracker3 exited with status {code}: {stderr}")]
    Failed { code: i32, stderr: String },

    /// The indexer did not finish in time and was killed.
    #[error("tracker3 timed out after {duration:?}")]
    Timeout { duration: Duration },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
