//! Output formatting module

use anyhow::Result;
use dchek_core::Verdict;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single verdict
    fn format_verdict(&mut self, verdict: &Verdict) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence stating the verdict
    Text,
    /// JSON object with the verdict and its findings
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Sentence reported for a verdict
pub fn verdict_sentence(verdict: &Verdict) -> String {
    if verdict.is_flagged() {
        format!(
            "The domain '{}' contains non-standard Latin or Cyrillic characters.",
            verdict.original
        )
    } else {
        format!(
            "The domain '{}' does not contain non-standard Latin variations or Cyrillic characters.",
            verdict.original
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_sentence() {
        let verdict = dchek_core::classify("café.com");
        assert_eq!(
            verdict_sentence(&verdict),
            "The domain 'café.com' contains non-standard Latin or Cyrillic characters."
        );
    }

    #[test]
    fn test_clean_sentence() {
        let verdict = dchek_core::classify("example.com");
        assert_eq!(
            verdict_sentence(&verdict),
            "The domain 'example.com' does not contain non-standard Latin variations or Cyrillic characters."
        );
    }

    #[test]
    fn test_sentence_uses_original_domain() {
        let verdict = dchek_core::classify("xn--e1aybc.com");
        assert!(verdict_sentence(&verdict).starts_with("The domain 'xn--e1aybc.com' contains"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::Text.as_str(), "text");
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }
}
