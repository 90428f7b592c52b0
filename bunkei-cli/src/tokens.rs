//! Pre-tokenized input for Japanese mode
//!
//! The morphological analyzer is an external collaborator; this module reads
//! its output from a JSON file (an array of `{"surface": ..., "pos": ...}`
//! objects) so the Japanese pipeline can run without the analyzer being
//! linked into the binary.

use anyhow::{Context, Result};
use bunkei_core::Token;
use std::fs;
use std::path::Path;

/// Load a token stream from a JSON file
pub fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tokens file: {}", path.display()))?;
    let tokens: Vec<Token> = serde_json::from_str(&data)
        .with_context(|| format!("Invalid tokens file: {}", path.display()))?;
    Ok(tokens)
}
