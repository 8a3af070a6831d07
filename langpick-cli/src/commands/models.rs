//! Models command implementation

use anyhow::Result;
use clap::Args;
use langpick_core::{ModelRegistry, ProbeOutcome};
use serde::Serialize;
use std::io::Write;

use crate::output::{self, OutputFormat, Report};
use crate::probe_source::{ProbeSource, ResolverArgs};

/// Arguments for the models command
#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(flatten)]
    pub resolver: ResolverArgs,
}

/// Availability of one registered model
#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub language: &'static str,
    pub model: &'static str,
    pub available: bool,
    pub status: String,
}

impl Report for ModelStatus {
    fn to_text(&self) -> String {
        let mark = if self.available { "✓" } else { "✗" };
        format!("{mark} {} {} ({})", self.language, self.model, self.status)
    }
}

impl ModelsArgs {
    /// Execute the models command
    pub fn execute(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let config = self.resolver.load_config()?;
        log::info!(
            "Model availability source: {}",
            ProbeSource::of(&config).display_name()
        );
        let probe = config.build_probe();

        let statuses: Vec<ModelStatus> = ModelRegistry::new()
            .entries()
            .map(|(language, model)| {
                let outcome = probe.probe(model);
                let status = match &outcome {
                    ProbeOutcome::Available => "available".to_string(),
                    ProbeOutcome::NotFound => "not found".to_string(),
                    ProbeOutcome::Failed(reason) => format!("error: {reason}"),
                };
                ModelStatus {
                    language: language.code(),
                    model,
                    available: outcome.is_available(),
                    status,
                }
            })
            .collect();

        output::write_all(format, out, &statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_availability() {
        let args = ModelsArgs {
            resolver: ResolverArgs {
                available: vec!["zh_core_web_lg".to_string()],
                ..Default::default()
            },
        };
        let mut out = Vec::new();
        args.execute(OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✓ zh zh_core_web_lg (available)"));
        assert!(text.contains("✗ en en_core_web_lg (not found)"));
    }
}
