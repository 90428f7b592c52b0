//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific failure cases
#[derive(Debug)]
pub enum CliError {
    /// Neither inline text, files, nor stdin produced any text
    NoInput,
    /// `--tokens` given outside Japanese mode
    TokensRequireJapanese,
    /// `--tokens` given with more than one input
    TokensRequireSingleInput(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput => write!(f, "No text to process: provide --text, --input or stdin"),
            CliError::TokensRequireJapanese => {
                write!(f, "--tokens only applies to --language japanese")
            }
            CliError::TokensRequireSingleInput(count) => {
                write!(f, "--tokens requires exactly one input, got {count}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
