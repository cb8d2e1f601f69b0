//! dchek - flags domains containing homoglyph characters

use clap::Parser;
use dchek_cli::commands::Commands;
use dchek_cli::CliError;
use std::process::ExitCode;

/// Detect non-standard Latin and Cyrillic characters in domain names
#[derive(Debug, Parser)]
#[command(name = "dchek", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(CliError::InvalidDomain(_)) => eprintln!("{err}"),
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
