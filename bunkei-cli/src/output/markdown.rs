//! Markdown output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one result block per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.record_count += 1;
        if record.source == "-" {
            writeln!(self.writer, "## Result")?;
        } else {
            writeln!(self.writer, "## Result: {}", record.source)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "**Original:** {}", record.original)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Detected Type:** {}", record.detected)?;
        if let Some(converted) = &record.converted {
            writeln!(self.writer)?;
            writeln!(self.writer, "**Converted Sentence:**")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "> {converted}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "*Total inputs: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_contains_original_detected_and_converted() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter
                .format_record(&Record {
                    source: "story.txt".to_string(),
                    original: "I was tired, but I kept working.".to_string(),
                    detected: "Compound".to_string(),
                    converted: Some("I was tired. I kept working.".to_string()),
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("## Result: story.txt"));
        assert!(rendered.contains("**Detected Type:** Compound"));
        assert!(rendered.contains("> I was tired. I kept working."));
        assert!(rendered.contains("*Total inputs: 1*"));
    }
}
