//! Detect command implementation

use anyhow::Result;
use clap::Args;
use langpick_core::{ModelRegistry, NameClassifier};
use serde::Serialize;
use std::io::Write;

use crate::output::{self, OutputFormat, Report};

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Dataset names to classify
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Classification of one dataset name
#[derive(Debug, Serialize)]
pub struct DetectionReport {
    pub dataset: String,
    pub language: String,
    pub reason: String,
    pub model: String,
}

impl Report for DetectionReport {
    fn to_text(&self) -> String {
        format!(
            "{} -> {} ({}) -> {}",
            self.dataset, self.language, self.reason, self.model
        )
    }
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let reports = self.reports();
        output::write_all(format, out, &reports)
    }

    fn reports(&self) -> Vec<DetectionReport> {
        let classifier = NameClassifier::new();
        let registry = ModelRegistry::new();

        self.names
            .iter()
            .map(|name| {
                let detection = classifier.detect(name.as_str());
                DetectionReport {
                    dataset: name.clone(),
                    language: detection.language.code().to_string(),
                    reason: detection.reason.to_string(),
                    model: registry.model_for(detection.language).to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(names: &[&str]) -> DetectArgs {
        DetectArgs {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_reports() {
        let reports = args(&["demo", "novel", "novel_eng"]).reports();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].language, "en");
        assert_eq!(reports[0].reason, "no language indicators");
        assert_eq!(reports[1].model, "zh_core_web_lg");
        assert_eq!(reports[2].reason, "special-case English dataset");
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        args(&["anony_chs"])
            .execute(OutputFormat::Text, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "anony_chs -> zh (Chinese keyword 'chs') -> zh_core_web_lg\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        args(&["中文数据集"])
            .execute(OutputFormat::Json, &mut out)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["dataset"], "中文数据集");
        assert_eq!(parsed[0]["language"], "zh");
    }
}
