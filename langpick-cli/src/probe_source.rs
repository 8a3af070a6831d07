//! Probe source management for CLI

use clap::Args;
use langpick_core::{LangpickConfig, LanguageResolver};
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Where model availability information comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeSource {
    /// Directories from `LANGPICK_MODEL_PATH`
    Environment,
    /// Explicit model search directories
    Directories(Vec<PathBuf>),
    /// A fixed list of available model identifiers
    Static(Vec<String>),
}

impl ProbeSource {
    /// Describe the probe source of a configuration
    pub fn of(config: &LangpickConfig) -> Self {
        if let Some(ids) = &config.models.available {
            ProbeSource::Static(ids.clone())
        } else if config.models.search_paths.is_empty() {
            ProbeSource::Environment
        } else {
            ProbeSource::Directories(config.models.search_paths.clone())
        }
    }

    /// Get the display name for the probe source
    pub fn display_name(&self) -> String {
        match self {
            ProbeSource::Environment => {
                format!("Environment: ${}", langpick_core::probe::MODEL_PATH_ENV)
            }
            ProbeSource::Directories(paths) => {
                let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                format!("Directories: {}", joined.join(", "))
            }
            ProbeSource::Static(ids) => format!("Static: [{}]", ids.join(", ")),
        }
    }
}

/// Options selecting configuration and model availability
#[derive(Debug, Clone, Default, Args)]
pub struct ResolverArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to search for installed models (repeatable)
    #[arg(long = "model-path", value_name = "DIR")]
    pub model_paths: Vec<PathBuf>,

    /// Treat this model as available instead of probing (repeatable)
    #[arg(long = "available", value_name = "MODEL")]
    pub available: Vec<String>,

    /// Timeout for a single availability probe
    #[arg(long, value_name = "MS")]
    pub probe_timeout_ms: Option<u64>,
}

impl ResolverArgs {
    /// Load the configuration file, if any, and apply command-line overrides
    pub fn load_config(&self) -> CliResult<LangpickConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                LangpickConfig::from_file(path)
                    .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?
            }
            None => LangpickConfig::default(),
        };

        if !self.model_paths.is_empty() {
            config.models.search_paths = self.model_paths.clone();
            config.models.available = None;
        }
        if !self.available.is_empty() {
            config.models.available = Some(self.available.clone());
        }
        if let Some(ms) = self.probe_timeout_ms {
            config.models.probe_timeout_ms = ms;
        }

        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Configuration plus a resolver built from it
    pub fn build(&self) -> CliResult<(LangpickConfig, LanguageResolver)> {
        let config = self.load_config()?;
        log::info!("Model availability source: {}", ProbeSource::of(&config).display_name());
        let resolver = config.build_resolver();
        Ok((config, resolver))
    }
}
