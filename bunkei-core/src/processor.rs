//! Configuration and the processing entry point
//!
//! [`StructureProcessor`] owns the compiled lexicon and the injected
//! capabilities (token provider, connector chooser) and dispatches
//! detection and conversion to the active language pipeline. Every call is
//! a pure function of its arguments plus the immutable configuration, so a
//! processor can be shared across threads freely.

use crate::chooser::{ConnectorChooser, ThreadRngChooser};
use crate::english::{self, CompoundStrategy};
use crate::error::Result;
use crate::japanese::{self, token::Token, token::TokenProvider};
use crate::lexicon::{EnglishLexicon, LexiconConfig, LexiconProfile};
use crate::types::{Language, SentenceType};
use std::sync::Arc;

/// Processor configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) profile: LexiconProfile,
    pub(crate) compound_strategy: CompoundStrategy,
    pub(crate) lexicon_config: Option<LexiconConfig>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured language mode
    pub fn language(&self) -> Language {
        self.language
    }

    /// The configured built-in lexicon profile
    pub fn lexicon_profile(&self) -> LexiconProfile {
        self.profile
    }

    /// The configured Compound connector strategy
    pub fn compound_strategy(&self) -> CompoundStrategy {
        self.compound_strategy
    }
}

/// Configuration builder
///
/// Capabilities (token provider, connector chooser) are attached here and
/// travel into the processor via [`ConfigBuilder::build_processor`].
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
    token_provider: Option<Arc<dyn TokenProvider>>,
    chooser: Option<Arc<dyn ConnectorChooser>>,
}

impl ConfigBuilder {
    /// Set the language by code (`en`, `ja`, ...)
    pub fn language(mut self, code: &str) -> Result<Self> {
        self.config.language = Language::from_code(code)?;
        Ok(self)
    }

    /// Set the language mode directly
    pub fn language_mode(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Select a built-in lexicon profile
    pub fn lexicon_profile(mut self, profile: LexiconProfile) -> Self {
        self.config.profile = profile;
        self
    }

    /// Use a custom lexicon instead of a built-in profile
    pub fn lexicon_config(mut self, config: LexiconConfig) -> Self {
        self.config.lexicon_config = Some(config);
        self
    }

    /// Select the Compound connector strategy
    pub fn compound_strategy(mut self, strategy: CompoundStrategy) -> Self {
        self.config.compound_strategy = strategy;
        self
    }

    /// Attach a tokenizer for the Japanese pipeline
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Substitute the connector chooser used by the Complex converter
    pub fn connector_chooser(mut self, chooser: Arc<dyn ConnectorChooser>) -> Self {
        self.chooser = Some(chooser);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<Config> {
        if let Some(lexicon_config) = &self.config.lexicon_config {
            lexicon_config.validate()?;
        }
        Ok(self.config)
    }

    /// Build a processor directly
    pub fn build_processor(self) -> Result<StructureProcessor> {
        let lexicon = match &self.config.lexicon_config {
            Some(lexicon_config) => EnglishLexicon::from_config(lexicon_config)?,
            None => EnglishLexicon::from_profile(self.config.profile)?,
        };
        Ok(StructureProcessor {
            lexicon,
            language: self.config.language,
            compound_strategy: self.config.compound_strategy,
            chooser: self.chooser.unwrap_or_else(|| Arc::new(ThreadRngChooser)),
            token_provider: self.token_provider,
            config: self.config,
        })
    }
}

/// Main entry point for sentence-structure detection and conversion
///
/// # Example
///
/// ```rust
/// use bunkei_core::{SentenceType, StructureProcessor};
///
/// let processor = StructureProcessor::new().unwrap();
/// assert_eq!(
///     processor.detect("I stayed home because it was raining."),
///     SentenceType::Complex
/// );
/// assert_eq!(
///     processor.convert("I was tired, but I kept working.", SentenceType::Simple),
///     "I was tired. I kept working."
/// );
/// ```
pub struct StructureProcessor {
    config: Config,
    language: Language,
    lexicon: EnglishLexicon,
    compound_strategy: CompoundStrategy,
    chooser: Arc<dyn ConnectorChooser>,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl StructureProcessor {
    /// Create a processor with default configuration (English, full lexicon)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor for a language code
    pub fn with_language(code: &str) -> Result<Self> {
        Config::builder().language(code)?.build_processor()
    }

    /// Create a processor from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        ConfigBuilder {
            config,
            token_provider: None,
            chooser: None,
        }
        .build_processor()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active language mode
    pub fn language(&self) -> Language {
        self.language
    }

    /// Classify the structural type of the text
    pub fn detect(&self, text: &str) -> SentenceType {
        match self.language {
            Language::English => english::detector::detect(text, &self.lexicon),
            Language::Japanese => japanese::detector::detect(self.tokens(text).as_deref()),
        }
    }

    /// Segment the text into its ordered clause list
    pub fn clauses(&self, text: &str) -> Vec<String> {
        match self.language {
            Language::English => english::segmenter::split_clauses(text, &self.lexicon),
            Language::Japanese => {
                japanese::segmenter::split_clauses(text, self.tokens(text).as_deref())
            }
        }
    }

    /// Rewrite the text toward the target structural form
    ///
    /// Returns the input unchanged when it already has the target type, when
    /// the input is empty or whitespace, and when no converter exists for
    /// the target in the active language mode.
    pub fn convert(&self, text: &str, target: SentenceType) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        if self.detect(text) == target {
            return text.to_string();
        }

        let clauses = self.clauses(text);
        match self.language {
            Language::English => match target {
                SentenceType::Simple => english::converter::to_simple(text, &clauses),
                SentenceType::Compound => english::converter::to_compound(
                    text,
                    &clauses,
                    &self.lexicon,
                    self.compound_strategy,
                ),
                SentenceType::Complex => english::converter::to_complex(
                    text,
                    &clauses,
                    &self.lexicon,
                    self.chooser.as_ref(),
                ),
                SentenceType::CompoundComplex => text.to_string(),
            },
            Language::Japanese => match target {
                SentenceType::Simple => japanese::converter::to_simple(text, &clauses),
                SentenceType::Compound => japanese::converter::to_compound(text, &clauses),
                SentenceType::Complex => japanese::converter::to_complex(text, &clauses),
                SentenceType::CompoundComplex => text.to_string(),
            },
        }
    }

    fn tokens(&self, text: &str) -> Option<Vec<Token>> {
        self.token_provider
            .as_ref()
            .and_then(|provider| provider.tokenize(text))
    }
}
