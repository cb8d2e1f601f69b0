//! Check command implementation

use crate::config::{CliConfig, CONFIG_ENV};
use crate::error::CliResult;
use crate::input::domain_from_arg;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use clap::Args;
use dchek_core::DomainClassifier;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// Exit code returned by `--strict-exit` when the domain is flagged
pub const FLAGGED_EXIT_CODE: u8 = 2;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Domain to check, Unicode or xn-- encoded
    #[arg(short, long, value_name = "DOMAIN", allow_hyphen_values = true)]
    pub domain: OsString,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// List the characters behind a flagged verdict
    #[arg(short, long)]
    pub explain: bool,

    /// Exit with status 2 when the domain is flagged
    #[arg(long)]
    pub strict_exit: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command, returning the process exit status
    pub fn execute(&self) -> CliResult<u8> {
        self.init_logging();

        let domain = domain_from_arg(&self.domain)?;
        let config = CliConfig::load(self.config.as_deref())?;
        log::debug!("Arguments: {:?}", self);

        let format = self.format.unwrap_or(config.output.format);
        let explain = self.explain || config.output.explain;

        let classifier = DomainClassifier::with_config(config.detector);
        let verdict = classifier.classify(&domain);
        log::info!(
            "Checked {} ({} findings)",
            verdict.original,
            verdict.findings.len()
        );

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(io::stdout(), explain)),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        };
        formatter.format_verdict(&verdict)?;
        formatter.finish()?;

        if self.strict_exit && verdict.is_flagged() {
            Ok(FLAGGED_EXIT_CODE)
        } else {
            Ok(0)
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(domain: &str) -> CheckArgs {
        CheckArgs {
            domain: OsString::from(domain),
            format: None,
            config: None,
            explain: false,
            strict_exit: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_check_args_debug() {
        let debug_str = format!("{:?}", args("example.com"));
        assert!(debug_str.contains("CheckArgs"));
        assert!(debug_str.contains("example.com"));
    }

    #[test]
    fn test_clean_domain_succeeds() {
        assert_eq!(args("example.com").execute().unwrap(), 0);
    }

    #[test]
    fn test_flagged_domain_succeeds_without_strict_exit() {
        assert_eq!(args("café.com").execute().unwrap(), 0);
    }

    #[test]
    fn test_strict_exit() {
        let mut check = args("аррle.com");
        check.strict_exit = true;
        assert_eq!(check.execute().unwrap(), FLAGGED_EXIT_CODE);

        let mut clean = args("apple.com");
        clean.strict_exit = true;
        assert_eq!(clean.execute().unwrap(), 0);
    }

    #[test]
    fn test_blank_domain_rejected() {
        let err = args("  ").execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let mut check = args("example.com");
        check.config = Some(PathBuf::from("/nonexistent/dchek.toml"));
        assert!(check.execute().is_err());
    }
}
