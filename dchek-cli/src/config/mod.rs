//! Configuration module

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use anyhow::Context;
use dchek_core::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "DCHEK_CONFIG";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Detection configuration
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// List the findings behind a flagged verdict
    pub explain: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            explain: false,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> CliResult<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Commented configuration template matching the built-in defaults
pub const TEMPLATE: &str = r#"# dchek configuration

[detector]
# Decode xn-- (Punycode) domains before scanning them
decode_ace = true

# Which letters outside a-z, A-Z, 0-9, '-' and '.' flag a domain:
#   "any-letter" - every letter, whatever its script
#   "catalogued" - only extended-Latin variants and Cyrillic look-alikes
letter_policy = "any-letter"

[detector.cyrillic]
# How Cyrillic catalog entries are matched:
#   "sequence"    - entries, combining marks included, must appear verbatim
#   "base-letter" - compare base letters after canonical decomposition
matching = "sequence"

# Also match the lowercase form of every catalog entry
fold_case = true

[output]
# "text" or "json"
format = "text"

# List the characters behind a flagged verdict
explain = false
"#;
