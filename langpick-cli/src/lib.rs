//! Langpick CLI library
//!
//! This library provides the command-line interface for exercising
//! dataset language detection and model resolution.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod probe_source;

pub use cli::Cli;
pub use error::{CliError, CliResult};
