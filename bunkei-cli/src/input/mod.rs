//! Input collection: glob patterns, file reading, inline text, stdin

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io};

/// One unit of input text with a displayable origin
#[derive(Debug, Clone)]
pub struct InputItem {
    /// File path, or `-` for inline text and stdin
    pub source: String,
    /// The raw text, surrounding whitespace trimmed
    pub text: String,
}

/// Gather inputs from inline text, file patterns, or stdin (in that order)
///
/// Empty files are skipped with a warning. Input order is preserved, so
/// batch output lines up with the argument order.
pub fn collect(patterns: &[String], inline: Option<&str>) -> Result<Vec<InputItem>> {
    if let Some(text) = inline {
        return single_item(text);
    }
    if patterns.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return single_item(&buffer);
    }

    let mut items = Vec::new();
    for path in resolve_patterns(patterns)? {
        let text = read_text(&path)?;
        let text = text.trim();
        if text.is_empty() {
            log::warn!("skipping empty file: {}", path.display());
            continue;
        }
        items.push(InputItem {
            source: path.display().to_string(),
            text: text.to_string(),
        });
    }
    if items.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(items)
}

fn single_item(text: &str) -> Result<Vec<InputItem>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(vec![InputItem {
        source: "-".to_string(),
        text: text.to_string(),
    }])
}

/// Resolve file patterns to sorted, de-duplicated file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for path in paths {
            let path = path.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }
    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read a file as UTF-8 text
pub fn read_text(path: &std::path::Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
