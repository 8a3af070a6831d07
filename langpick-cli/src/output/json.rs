//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write, R: Report> OutputFormatter<R> for JsonFormatter<W> {
    fn write_record(&mut self, record: &R) -> Result<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
