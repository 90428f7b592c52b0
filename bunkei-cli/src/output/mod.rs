//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// One processed input, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// File path, or `-` for inline text and stdin
    pub source: String,
    /// The input text as processed
    pub original: String,
    /// Detected structural type label
    pub detected: String,
    /// Rewritten text, present for the convert command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<String>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and buffer or emit a single record
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (flush, close the JSON array, write totals)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line
    Text,
    /// JSON array of records with metadata
    Json,
    /// Markdown result blocks
    Markdown,
}

/// Build the formatter for the requested format
pub fn make_formatter(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
