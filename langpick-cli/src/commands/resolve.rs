//! Resolve command implementation

use anyhow::Result;
use clap::Args;
use langpick_core::{resolve_dataset_config, ResolveError};
use serde::Serialize;
use std::io::Write;

use crate::error::CliError;
use crate::output::{self, OutputFormat, Report};
use crate::probe_source::ResolverArgs;

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Dataset name
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

/// Outcome of resolving one dataset
#[derive(Debug, Serialize)]
pub struct ResolutionReport {
    pub dataset: String,
    pub language: String,
    pub preferred: String,
    pub model: String,
    pub fallback: bool,
}

impl Report for ResolutionReport {
    fn to_text(&self) -> String {
        if self.fallback {
            format!("{} (fallback, preferred {})", self.model, self.preferred)
        } else {
            self.model.clone()
        }
    }
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let (config, resolver) = self.resolver.build()?;

        let resolution = match resolve_dataset_config(&self.name, &config, &resolver) {
            Ok(resolution) => resolution,
            Err(ResolveError::NoModelsAvailable) => {
                return Err(CliError::ResolutionError(
                    ResolveError::NoModelsAvailable.to_string(),
                )
                .into());
            }
            Err(e) => return Err(e.into()),
        };

        let report = ResolutionReport {
            dataset: self.name.clone(),
            language: resolution.language.code().to_string(),
            preferred: resolution.preferred,
            model: resolution.model,
            fallback: resolution.fallback,
        };
        output::write_all(format, out, &[report])
    }
}
