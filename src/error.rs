//! Error types for configuration loading.
//!
//! Gameplay outcomes (gate misses, short paths) are not errors and never
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving [`GameConfig`](crate::config::GameConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading or writing the config file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for the schema
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value parsed but is unusable
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// No platform config directory could be determined
    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
