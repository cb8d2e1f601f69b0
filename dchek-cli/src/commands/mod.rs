//! CLI command implementations

use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::{Subcommand, ValueEnum};
use dchek_core::tables;

pub mod check;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a domain for homoglyph characters
    Check(check::CheckArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// Show the reference character tables
    Tables,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the command, returning the process exit status
    pub fn execute(&self) -> CliResult<u8> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute().map(|()| 0),
            Commands::Validate(args) => args.execute().map(|()| 0),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(0)
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        match self {
            ListCommands::Tables => {
                println!("Reference tables:");
                println!(
                    "  safe       {} characters (a-z, A-Z, 0-9, '-', '.')",
                    tables::safe_alphabet_len()
                );
                println!(
                    "  latin      {} variants across {} base letters",
                    tables::latin_variants().len(),
                    tables::LATIN_VARIANT_GROUPS.len()
                );
                println!(
                    "  cyrillic   {} entries",
                    tables::cyrillic_entries().len()
                );
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    let help = format
                        .to_possible_value()
                        .and_then(|value| value.get_help().map(|help| help.to_string()))
                        .unwrap_or_default();
                    println!("  {:<6} - {}", format.as_str(), help);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("dchek.toml"),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("dchek.toml"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Tables,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Tables"));
    }

    #[test]
    fn test_list_commands_exit_zero() {
        for subcommand in [ListCommands::Tables, ListCommands::Formats] {
            let cmd = Commands::List { subcommand };
            assert_eq!(cmd.execute().unwrap(), 0);
        }
    }

    #[test]
    fn test_validate_failure_propagates() {
        let cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("/nonexistent/dchek.toml"),
        });
        assert!(cmd.execute().is_err());
    }
}
