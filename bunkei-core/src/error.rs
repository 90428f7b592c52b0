//! Core error types

use thiserror::Error;

/// Errors raised while configuring the core.
///
/// Detection and conversion themselves never fail: empty input, an
/// unavailable tokenizer, and an unconvertible target type are all valid,
/// non-erroring states. Errors only arise from invalid configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Unsupported language code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
    },

    /// Unknown sentence type label
    #[error("unknown sentence type '{value}'")]
    UnknownSentenceType {
        /// The label that failed to parse
        value: String,
    },

    /// Lexicon validation error
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Lexicon pattern failed to compile
    #[error("invalid lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Lexicon configuration failed to parse
    #[error("lexicon configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
