//! JSON output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a pretty-printed array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Record>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_render_as_a_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_record(&Record {
                    source: "-".to_string(),
                    original: "The cat sat.".to_string(),
                    detected: "Simple".to_string(),
                    converted: None,
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        let rendered = String::from_utf8(buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["detected"], "Simple");
        // absent conversion must not serialize as null
        assert!(parsed[0].get("converted").is_none());
    }
}
