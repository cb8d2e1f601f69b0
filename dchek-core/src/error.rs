//! Error types for the detector
//!
//! Classification itself never fails; only loading a configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a detector configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        /// The configuration file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not match the schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
