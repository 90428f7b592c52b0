//! Plain text output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter
///
/// Emits the converted text when present, the detected type otherwise. File
/// inputs are prefixed with their path so batch output stays attributable.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        let payload = record.converted.as_deref().unwrap_or(&record.detected);
        if record.source == "-" {
            writeln!(self.writer, "{payload}")?;
        } else {
            writeln!(self.writer, "{}: {payload}", record.source)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
