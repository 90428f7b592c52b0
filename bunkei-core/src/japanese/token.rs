//! Morphological tokens and the tokenizer capability

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Part-of-speech tag for conjunctive particles (接続助詞)
pub const POS_CONJUNCTIVE_PARTICLE: &str = "接続助詞";

/// Part-of-speech tag for conjunctions (接続詞)
pub const POS_CONJUNCTION: &str = "接続詞";

/// One unit of a morphological analyzer's output
///
/// Produced and owned by the external tokenizer; the pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal text of the token
    pub surface: String,
    /// Grammatical category, using the analyzer's tag set
    pub pos: String,
}

impl Token {
    /// Create a token from surface form and part-of-speech tag
    pub fn new(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }
}

/// External tokenizer capability
///
/// `None` means the tokenizer is not ready or cannot handle the text; the
/// Japanese pipeline then falls back to whole-text/Simple behavior. The
/// tokenizer's asynchronous initialization lives entirely behind this trait:
/// the core never blocks or queues waiting for it.
pub trait TokenProvider: Send + Sync {
    /// Tokenize the text, or return `None` when unavailable
    fn tokenize(&self, text: &str) -> Option<Vec<Token>>;
}

/// Token provider backed by a fixed text-to-tokens table
///
/// Useful for tests and for callers that run an external morphological
/// analyzer ahead of time (the CLI's pre-tokenized input path). Unknown text
/// behaves like an unavailable tokenizer.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    entries: HashMap<String, Vec<Token>>,
}

impl StaticTokenProvider {
    /// Create an empty provider (always unavailable)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding tokens for one text
    pub fn for_text(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        let mut provider = Self::new();
        provider.insert(text, tokens);
        provider
    }

    /// Register the token stream for a text
    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        self.entries.insert(text.into(), tokens);
    }
}

impl TokenProvider for StaticTokenProvider {
    fn tokenize(&self, text: &str) -> Option<Vec<Token>> {
        self.entries.get(text).cloned()
    }
}
