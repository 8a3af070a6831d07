//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigError(String),
    /// Model resolution failed
    ResolutionError(String),
    /// Configuration file failed validation
    ValidationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ResolutionError(msg) => write!(f, "Resolution error: {msg}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_resolution_error_display() {
        let error = CliError::ResolutionError("no language models available".to_string());
        assert_eq!(
            error.to_string(),
            "Resolution error: no language models available"
        );
    }

    #[test]
    fn test_validation_failed_display() {
        let error = CliError::ValidationFailed("bad timeout".to_string());
        assert_eq!(error.to_string(), "Validation failed: bad timeout");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("x".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_unicode() {
        let error = CliError::ConfigError("数据集/配置 文件.toml".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: 数据集/配置 文件.toml"
        );
    }
}
