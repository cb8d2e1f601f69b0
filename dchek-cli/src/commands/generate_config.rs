//! Writes the commented default configuration

use crate::config::{CONFIG_ENV, TEMPLATE};
use crate::error::CliResult;
use anyhow::{bail, Context};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Where to write the configuration
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (pass --force to replace it)",
                self.output.display()
            );
        }

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;
        log::info!("Wrote configuration template to {}", self.output.display());

        println!("Wrote default detector settings to {}", self.output.display());
        println!("Check edits with `dchek validate --config {}`", self.output.display());
        println!(
            "Pass it to `dchek check --config`, or set {CONFIG_ENV} to apply it to every check"
        );
        Ok(())
    }
}
