//! English connective lexicons
//!
//! The English pipeline is driven entirely by word lists: which connectives
//! split clauses, which mark subordination or coordination for detection,
//! and which force a `but` join in the Compound converter. The lists exist
//! in two built-in profiles that drifted apart in practice (the detection
//! profile dropped `nor`, `for`, `yet`), so both are first-class here, and
//! a custom lexicon can be loaded from TOML.

use crate::error::{CoreError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Connectives that split a sentence into clauses
pub const CLAUSE_CONNECTIVES: &[&str] = &[
    "and", "but", "or", "nor", "so", "for", "yet", "because", "although", "while", "when",
    "since", "though", "unless",
];

/// Clause connectives with `nor`, `for`, `yet` dropped
pub const CLAUSE_CONNECTIVES_REDUCED: &[&str] = &[
    "and", "but", "or", "so", "because", "although", "while", "when", "since", "though",
    "unless",
];

/// Words introducing a dependent clause
pub const SUBORDINATING_WORDS: &[&str] = &[
    "because", "although", "since", "when", "while", "if", "after", "before", "though",
    "unless",
];

/// Words joining clauses of equal grammatical weight
pub const COORDINATING_WORDS: &[&str] = &["and", "but", "or", "nor", "so", "for", "yet"];

/// Coordinating words with `nor`, `for`, `yet` dropped
pub const COORDINATING_WORDS_REDUCED: &[&str] = &["and", "but", "or", "so"];

/// Words signalling opposition between clauses
pub const CONTRAST_MARKERS: &[&str] = &[
    "but",
    "however",
    "although",
    "though",
    "yet",
    "whereas",
    "conversely",
    "on the other hand",
];

/// Negating words (the `n't` contraction is matched separately)
pub const NEGATION_WORDS: &[&str] = &[
    "not", "never", "none", "neither", "nor", "without", "hardly", "barely", "scarcely",
];

/// Subordinators the Complex converter chooses between
pub const COMPLEX_CONNECTIVES: &[&str] = &["because", "although", "while", "since", "when"];

/// Built-in lexicon profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconProfile {
    /// The full connective set
    #[default]
    Full,
    /// The variant without `nor`, `for`, `yet`
    Reduced,
}

/// A compiled English lexicon
///
/// All matchers are whole-word and case-insensitive, compiled once at
/// construction. Construction is the only fallible step in the English
/// pipeline; a built lexicon never fails at match time.
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    name: String,
    sentence_break: Regex,
    clause_split: Regex,
    subordinating: Regex,
    coordinating: Regex,
    contrast: Regex,
    negation: Regex,
    negation_contraction: Regex,
    squeeze: Regex,
    complex_connectives: Vec<String>,
}

impl EnglishLexicon {
    /// Build the full built-in lexicon
    pub fn full() -> Result<Self> {
        Self::compile(
            "full",
            CLAUSE_CONNECTIVES,
            SUBORDINATING_WORDS,
            COORDINATING_WORDS,
            CONTRAST_MARKERS,
            NEGATION_WORDS,
            COMPLEX_CONNECTIVES,
        )
    }

    /// Build the reduced built-in lexicon
    pub fn reduced() -> Result<Self> {
        Self::compile(
            "reduced",
            CLAUSE_CONNECTIVES_REDUCED,
            SUBORDINATING_WORDS,
            COORDINATING_WORDS_REDUCED,
            CONTRAST_MARKERS,
            NEGATION_WORDS,
            COMPLEX_CONNECTIVES,
        )
    }

    /// Build a lexicon from a named profile
    pub fn from_profile(profile: LexiconProfile) -> Result<Self> {
        match profile {
            LexiconProfile::Full => Self::full(),
            LexiconProfile::Reduced => Self::reduced(),
        }
    }

    /// Build a lexicon from a custom configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate()?;
        Self::compile(
            &config.metadata.name,
            &config.clause.connectives,
            &config.detection.subordinating,
            &config.detection.coordinating,
            &config.compound.contrast,
            &config.compound.negation,
            &config.complex.connectives,
        )
    }

    fn compile<S: AsRef<str>>(
        name: &str,
        clause: &[S],
        subordinating: &[S],
        coordinating: &[S],
        contrast: &[S],
        negation: &[S],
        complex: &[S],
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            sentence_break: Regex::new(r"[.!?]+\s+")?,
            clause_split: Regex::new(&format!(r"(?i)[,;]?\s*\b(?:{})\b", alternation(clause)))?,
            subordinating: word_matcher(subordinating)?,
            coordinating: word_matcher(coordinating)?,
            contrast: word_matcher(contrast)?,
            negation: word_matcher(negation)?,
            negation_contraction: Regex::new(r"(?i)n't\b")?,
            squeeze: Regex::new(r"\s+([,.!?])")?,
            complex_connectives: complex.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    /// The profile or configuration name this lexicon was built from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn sentence_break(&self) -> &Regex {
        &self.sentence_break
    }

    pub(crate) fn clause_split(&self) -> &Regex {
        &self.clause_split
    }

    /// Does the text contain a subordinating connective?
    pub fn has_subordinating(&self, text: &str) -> bool {
        self.subordinating.is_match(text)
    }

    /// Does the text contain a coordinating connective?
    pub fn has_coordinating(&self, text: &str) -> bool {
        self.coordinating.is_match(text)
    }

    /// Does the clause contain a contrast marker?
    pub fn has_contrast(&self, clause: &str) -> bool {
        self.contrast.is_match(clause)
    }

    /// Does the clause negate, by word or by `n't` contraction?
    pub fn has_negation(&self, clause: &str) -> bool {
        self.negation.is_match(clause) || self.negation_contraction.is_match(clause)
    }

    /// Collapse stray whitespace before punctuation
    pub fn squeeze_punctuation(&self, text: &str) -> String {
        self.squeeze.replace_all(text, "$1").into_owned()
    }

    /// The subordinator pool the Complex converter draws from
    pub fn complex_connectives(&self) -> &[String] {
        &self.complex_connectives
    }
}

fn alternation<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

fn word_matcher<S: AsRef<str>>(words: &[S]) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(words)))?)
}

/// Custom lexicon configuration, loadable from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Lexicon metadata
    #[serde(default)]
    pub metadata: LexiconMetadata,
    /// Clause segmentation word list
    pub clause: ClauseSection,
    /// Detection word lists
    pub detection: DetectionSection,
    /// Compound converter word lists
    #[serde(default)]
    pub compound: CompoundSection,
    /// Complex converter word list
    #[serde(default)]
    pub complex: ComplexSection,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconMetadata {
    /// Display name for the lexicon
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for LexiconMetadata {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

/// Connectives used for clause segmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseSection {
    /// Whole-word connectives that open a new clause
    pub connectives: Vec<String>,
}

/// Word lists consulted by the sentence-type detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSection {
    /// Subordinating connectives
    pub subordinating: Vec<String>,
    /// Coordinating connectives
    pub coordinating: Vec<String>,
}

/// Word lists consulted by the contrast-aware Compound converter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundSection {
    /// Contrast markers forcing a `but` join
    #[serde(default = "default_contrast")]
    pub contrast: Vec<String>,
    /// Negation words (the `n't` contraction is always matched)
    #[serde(default = "default_negation")]
    pub negation: Vec<String>,
}

impl Default for CompoundSection {
    fn default() -> Self {
        Self {
            contrast: default_contrast(),
            negation: default_negation(),
        }
    }
}

/// Subordinator pool for the Complex converter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexSection {
    /// Candidate subordinators, one chosen per conversion
    #[serde(default = "default_complex")]
    pub connectives: Vec<String>,
}

impl Default for ComplexSection {
    fn default() -> Self {
        Self {
            connectives: default_complex(),
        }
    }
}

fn default_name() -> String {
    "custom".to_string()
}

fn default_contrast() -> Vec<String> {
    CONTRAST_MARKERS.iter().map(|s| s.to_string()).collect()
}

fn default_negation() -> Vec<String> {
    NEGATION_WORDS.iter().map(|s| s.to_string()).collect()
}

fn default_complex() -> Vec<String> {
    COMPLEX_CONNECTIVES.iter().map(|s| s.to_string()).collect()
}

impl LexiconConfig {
    /// Parse a lexicon configuration from TOML
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Check that every word list is usable
    pub fn validate(&self) -> Result<()> {
        let sections: [(&str, &[String]); 6] = [
            ("clause.connectives", &self.clause.connectives),
            ("detection.subordinating", &self.detection.subordinating),
            ("detection.coordinating", &self.detection.coordinating),
            ("compound.contrast", &self.compound.contrast),
            ("compound.negation", &self.compound.negation),
            ("complex.connectives", &self.complex.connectives),
        ];
        for (section, words) in sections {
            if words.is_empty() {
                return Err(CoreError::InvalidLexicon(format!(
                    "{section} must not be empty"
                )));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(CoreError::InvalidLexicon(format!(
                    "{section} contains a blank entry"
                )));
            }
        }
        Ok(())
    }
}
