//! Rule-based sentence-structure classification and rewriting
//!
//! bunkei decides whether text is grammatically Simple, Compound, Complex,
//! or Compound & Complex, and rewrites it toward a target structural form.
//! Two independently implemented language pipelines share the taxonomy and
//! the public contract:
//!
//! - **English**: regex/heuristic clause segmentation over a connective
//!   lexicon, available in two built-in profiles or as a custom TOML lexicon.
//! - **Japanese**: clause grouping over the token stream of an external
//!   morphological analyzer, injected as a [`TokenProvider`]; when no
//!   tokenizer is available the pipeline fails closed to single-clause /
//!   Simple behavior instead of erroring.
//!
//! Detection is a pure function of its input; conversion is a best-effort
//! stylistic rewrite that preserves clause order.
//!
//! # Example
//!
//! ```rust
//! use bunkei_core::{SentenceType, StructureProcessor};
//!
//! let processor = StructureProcessor::new().unwrap();
//! assert_eq!(
//!     processor.detect("The cat sat. The dog ran."),
//!     SentenceType::Simple
//! );
//! assert_eq!(
//!     processor.convert("I stayed home because it was raining.", SentenceType::Compound),
//!     "I stayed home, and it was raining."
//! );
//! ```

pub mod chooser;
pub mod english;
pub mod error;
pub mod japanese;
pub mod lexicon;
pub mod processor;
pub mod types;

pub use chooser::{ConnectorChooser, FixedChooser, SeededChooser, ThreadRngChooser};
pub use english::CompoundStrategy;
pub use error::{CoreError, Result};
pub use japanese::token::{
    StaticTokenProvider, Token, TokenProvider, POS_CONJUNCTION, POS_CONJUNCTIVE_PARTICLE,
};
pub use lexicon::{EnglishLexicon, LexiconConfig, LexiconProfile};
pub use processor::{Config, ConfigBuilder, StructureProcessor};
pub use types::{Language, SentenceType};

/// Classify text with a default processor for the given language code
pub fn detect(text: &str, language: &str) -> Result<SentenceType> {
    Ok(StructureProcessor::with_language(language)?.detect(text))
}

/// Rewrite text toward a target type with a default processor
///
/// Japanese conversion through this shortcut has no token provider and so
/// fails closed; build a [`StructureProcessor`] with
/// [`Config::builder`] to attach one.
pub fn convert(text: &str, target: SentenceType, language: &str) -> Result<String> {
    Ok(StructureProcessor::with_language(language)?.convert(text, target))
}
