//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Text formatter - one line per record
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write, R: Report> OutputFormatter<R> for TextFormatter<W> {
    fn write_record(&mut self, record: &R) -> Result<()> {
        writeln!(self.writer, "{}", record.to_text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
