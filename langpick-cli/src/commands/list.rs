//! List command implementation

use anyhow::Result;
use langpick_core::{Language, ModelRegistry};
use serde::Serialize;
use std::io::Write;

use super::ListCommands;
use crate::output::{self, OutputFormat, Report};

/// A registered language
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub model: &'static str,
}

impl Report for LanguageEntry {
    fn to_text(&self) -> String {
        format!("{:<4}{:<10}{}", self.code, self.name, self.model)
    }
}

/// An output format
#[derive(Debug, Serialize)]
pub struct FormatEntry {
    pub name: &'static str,
}

impl Report for FormatEntry {
    fn to_text(&self) -> String {
        self.name.to_string()
    }
}

/// Execute a list subcommand
pub fn execute(subcommand: ListCommands, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            let registry = ModelRegistry::new();
            let entries: Vec<LanguageEntry> = Language::ALL
                .iter()
                .map(|lang| LanguageEntry {
                    code: lang.code(),
                    name: lang.name(),
                    model: registry.model_for(*lang),
                })
                .collect();
            output::write_all(format, out, &entries)
        }
        ListCommands::Formats => {
            let entries: Vec<FormatEntry> = [OutputFormat::Text, OutputFormat::Json]
                .iter()
                .map(|f| FormatEntry { name: f.as_str() })
                .collect();
            output::write_all(format, out, &entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_languages() {
        let mut out = Vec::new();
        execute(ListCommands::Languages, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("zh  Chinese   zh_core_web_lg"));
        assert!(text.contains("en  English   en_core_web_lg"));
    }

    #[test]
    fn test_list_formats() {
        let mut out = Vec::new();
        execute(ListCommands::Formats, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "text\njson\n");
    }
}
