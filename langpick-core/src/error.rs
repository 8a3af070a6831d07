//! Error types
//!
//! Only [`ResolveError::NoModelsAvailable`] ever leaves the resolver. Missing
//! models, probe failures and unsupported codes are absorbed where they occur
//! and show up as log lines and default values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the resolver and the configuration loader
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Not a single registered model passed the availability probe
    #[error("no language models available")]
    NoModelsAvailable,

    /// Language code that is not in the registry
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),

    /// Configuration file could not be parsed
    #[error("configuration error in {path}: {message}")]
    Config {
        /// The configuration file path
        path: PathBuf,
        /// The specific error that occurred
        message: String,
    },

    /// Configuration parsed but holds values that cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML syntax or schema error
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for resolver and configuration operations
pub type Result<T> = std::result::Result<T, ResolveError>;
