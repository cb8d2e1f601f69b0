//! Checks a configuration file without classifying anything

use crate::config::CliConfig;
use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = CliConfig::from_file(&self.config)
            .with_context(|| format!("{}: configuration rejected", self.config.display()))?;

        println!("{}: configuration accepted", self.config.display());
        print!("{}", settings_summary(&config));
        Ok(())
    }
}

/// Effective settings, one `key = value` line each
fn settings_summary(config: &CliConfig) -> String {
    let detector = &config.detector;
    format!(
        "  detector.decode_ace = {}\n  \
           detector.letter_policy = {:?}\n  \
           detector.cyrillic.matching = {:?}\n  \
           detector.cyrillic.fold_case = {}\n  \
           output.format = {}\n  \
           output.explain = {}\n",
        detector.decode_ace(),
        detector.letter_policy(),
        detector.cyrillic_matching(),
        detector.fold_case(),
        config.output.format.as_str(),
        config.output.explain,
    )
}
