//! dchek CLI library
//!
//! This library provides the command-line interface for the dchek
//! homoglyph domain detector.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
