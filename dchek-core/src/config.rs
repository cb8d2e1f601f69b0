//! Detector configuration

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which letters outside the safe alphabet raise a flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterPolicy {
    /// Any code point whose general category is a letter (Lu, Ll, Lt, Lm, Lo)
    #[default]
    AnyLetter,
    /// Only characters listed in the Latin variant catalog
    ///
    /// Letters of other scripts (Greek, Armenian, CJK, ...) are never flagged.
    Catalogued,
}

/// How Cyrillic catalog entries are matched against a domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CyrillicMatching {
    /// Each entry, combining marks included, must occur as a substring
    #[default]
    Sequence,
    /// Entries and domain are decomposed (NFD) and compared by base code point
    BaseLetter,
}

/// Cyrillic catalog settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CyrillicConfig {
    /// Matching granularity
    pub matching: CyrillicMatching,
    /// Also match the lowercase form of every entry
    pub fold_case: bool,
}

impl Default for CyrillicConfig {
    fn default() -> Self {
        Self {
            matching: CyrillicMatching::default(),
            fold_case: true,
        }
    }
}

/// Detection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    pub(crate) decode_ace: bool,
    pub(crate) letter_policy: LetterPolicy,
    pub(crate) cyrillic: CyrillicConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            decode_ace: true,
            letter_policy: LetterPolicy::default(),
            cyrillic: CyrillicConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Create a configuration builder
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Whether `xn--` domains are decoded before scanning
    pub fn decode_ace(&self) -> bool {
        self.decode_ace
    }

    /// Letter flagging policy
    pub fn letter_policy(&self) -> LetterPolicy {
        self.letter_policy
    }

    /// Cyrillic matching granularity
    pub fn cyrillic_matching(&self) -> CyrillicMatching {
        self.cyrillic.matching
    }

    /// Whether lowercase forms of Cyrillic entries are matched too
    pub fn fold_case(&self) -> bool {
        self.cyrillic.fold_case
    }
}

/// Fluent builder for [`DetectorConfig`]
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    decode_ace: Option<bool>,
    letter_policy: Option<LetterPolicy>,
    cyrillic_matching: Option<CyrillicMatching>,
    fold_case: Option<bool>,
}

impl DetectorConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ACE decoding
    pub fn decode_ace(mut self, enabled: bool) -> Self {
        self.decode_ace = Some(enabled);
        self
    }

    /// Set the letter policy
    pub fn letter_policy(mut self, policy: LetterPolicy) -> Self {
        self.letter_policy = Some(policy);
        self
    }

    /// Set the Cyrillic matching granularity
    pub fn cyrillic_matching(mut self, matching: CyrillicMatching) -> Self {
        self.cyrillic_matching = Some(matching);
        self
    }

    /// Enable or disable lowercase matching of Cyrillic entries
    pub fn fold_case(mut self, enabled: bool) -> Self {
        self.fold_case = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> DetectorConfig {
        let mut config = DetectorConfig::default();

        if let Some(enabled) = self.decode_ace {
            config.decode_ace = enabled;
        }
        if let Some(policy) = self.letter_policy {
            config.letter_policy = policy;
        }
        if let Some(matching) = self.cyrillic_matching {
            config.cyrillic.matching = matching;
        }
        if let Some(enabled) = self.fold_case {
            config.cyrillic.fold_case = enabled;
        }

        config
    }
}
