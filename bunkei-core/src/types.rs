//! Sentence type taxonomy and language selection

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural classification of a sentence.
///
/// Derived on every detection call, never stored. `CompoundComplex` is only
/// produced by the English detector; the Japanese taxonomy is three-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceType {
    /// One independent clause, or a run of unconnected independent sentences
    #[default]
    Simple,
    /// Multiple independent clauses joined by coordinating connectives
    Compound,
    /// An independent clause with at least one subordinate clause
    Complex,
    /// Both coordination and subordination present (English only)
    CompoundComplex,
}

impl SentenceType {
    /// Human-readable label, as shown in CLI output
    pub fn label(&self) -> &'static str {
        match self {
            SentenceType::Simple => "Simple",
            SentenceType::Compound => "Compound",
            SentenceType::Complex => "Complex",
            SentenceType::CompoundComplex => "Compound & Complex",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SentenceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(SentenceType::Simple),
            "compound" => Ok(SentenceType::Compound),
            "complex" => Ok(SentenceType::Complex),
            "compound-complex" | "compound&complex" | "compound & complex" => {
                Ok(SentenceType::CompoundComplex)
            }
            _ => Err(CoreError::UnknownSentenceType {
                value: s.to_string(),
            }),
        }
    }
}

/// Language mode selecting which pipeline handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English regex/heuristic pipeline
    #[default]
    English,
    /// Japanese morphological-token pipeline
    Japanese,
}

impl Language {
    /// Resolve a language code such as `en` or `japanese`
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ja" | "jpn" | "japanese" => Ok(Language::Japanese),
            _ => Err(CoreError::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_type_labels() {
        assert_eq!(SentenceType::Simple.to_string(), "Simple");
        assert_eq!(
            SentenceType::CompoundComplex.to_string(),
            "Compound & Complex"
        );
    }

    #[test]
    fn sentence_type_from_str() {
        assert_eq!(
            "compound".parse::<SentenceType>().unwrap(),
            SentenceType::Compound
        );
        assert_eq!(
            "Compound & Complex".parse::<SentenceType>().unwrap(),
            SentenceType::CompoundComplex
        );
        assert!("run-on".parse::<SentenceType>().is_err());
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("Japanese").unwrap(), Language::Japanese);
        assert!(Language::from_code("fr").is_err());
        assert_eq!(Language::Japanese.code(), "ja");
    }
}
