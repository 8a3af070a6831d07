//! Validate command implementation

use anyhow::Result;
use clap::Args;
use langpick_core::LangpickConfig;
use std::io::Write;
use std::path::PathBuf;

use crate::error::CliError;
use crate::probe_source::ProbeSource;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Validating configuration: {}", self.config.display())?;

        match LangpickConfig::from_file(&self.config) {
            Ok(config) => {
                writeln!(out, "✓ Configuration is valid!")?;
                writeln!(out, "  Auto-detect: {}", config.language.auto_detect)?;
                writeln!(out, "  Validate models: {}", config.language.validate_models)?;
                writeln!(
                    out,
                    "  Model source: {}",
                    ProbeSource::of(&config).display_name()
                )?;
                writeln!(out, "  Dataset overrides: {}", config.datasets.len())?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Configuration is invalid!")?;
                writeln!(out, "  Error: {e}")?;
                Err(CliError::ValidationFailed(e.to_string()).into())
            }
        }
    }
}
