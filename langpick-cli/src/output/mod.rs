//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per record
    #[default]
    Text,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// A record that can be printed by any formatter
pub trait Report: Serialize {
    /// Single-line text rendering
    fn to_text(&self) -> String;
}

/// Trait for output formatters
pub trait OutputFormatter<R: Report> {
    /// Format and output a single record
    fn write_record(&mut self, record: &R) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Write every record with the formatter for `format`, then finish
pub fn write_all<R: Report, W: Write>(format: OutputFormat, writer: W, records: &[R]) -> Result<()> {
    match format {
        OutputFormat::Text => write_with(TextFormatter::new(writer), records),
        OutputFormat::Json => write_with(JsonFormatter::new(writer), records),
    }
}

fn write_with<R: Report>(mut out: impl OutputFormatter<R>, records: &[R]) -> Result<()> {
    for record in records {
        out.write_record(record)?;
    }
    out.finish()
}
