//! English structural converters
//!
//! All converters take the clause list produced by the segmenter and
//! re-render it. They are best-effort stylistic rewrites: clause order is
//! preserved, grammatical correctness of the output is not guaranteed.

use crate::chooser::ConnectorChooser;
use crate::lexicon::EnglishLexicon;
use serde::{Deserialize, Serialize};

/// Connector selection strategy for the Compound converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundStrategy {
    /// Pick `but` when contrast markers or a negation flip suggest
    /// opposition between adjacent clauses, `and` otherwise
    #[default]
    ContrastAware,
    /// Always join with `and`
    Naive,
}

/// Render every clause as its own sentence
pub fn to_simple(text: &str, clauses: &[String]) -> String {
    if clauses.is_empty() {
        return text.to_string();
    }
    clauses
        .iter()
        .map(|clause| format!("{}.", capitalize(clause)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join all clauses into one compound sentence
///
/// The connector between each pair of adjacent clauses is chosen per pair:
/// a contrast marker in either clause, or negation present in exactly one of
/// the two, forces `but`; otherwise `and`. The naive strategy skips the
/// analysis and always joins with `and`.
pub fn to_compound(
    text: &str,
    clauses: &[String],
    lexicon: &EnglishLexicon,
    strategy: CompoundStrategy,
) -> String {
    if clauses.len() <= 1 {
        return single_clause_fallback(text, clauses);
    }

    let mut parts = Vec::with_capacity(clauses.len());
    parts.push(capitalize(&clauses[0]));
    for (prev, clause) in clauses.iter().zip(clauses.iter().skip(1)) {
        let connector = match strategy {
            CompoundStrategy::Naive => "and",
            CompoundStrategy::ContrastAware => {
                let contrast = lexicon.has_contrast(prev) || lexicon.has_contrast(clause);
                let negation_flip = lexicon.has_negation(prev) != lexicon.has_negation(clause);
                if contrast || negation_flip {
                    "but"
                } else {
                    "and"
                }
            }
        };
        parts.push(format!("{connector} {}", clause.to_lowercase()));
    }

    format!("{}.", lexicon.squeeze_punctuation(&parts.join(", ")))
}

/// Fold all clauses into one complex sentence
///
/// The subordinator is picked from the lexicon's pool by the injected
/// chooser, so the choice is random by default and deterministic under a
/// seeded or fixed chooser.
pub fn to_complex(
    text: &str,
    clauses: &[String],
    lexicon: &EnglishLexicon,
    chooser: &dyn ConnectorChooser,
) -> String {
    if clauses.len() <= 1 {
        return single_clause_fallback(text, clauses);
    }

    let pool = lexicon.complex_connectives();
    let connector = pool
        .get(chooser.pick(pool.len()))
        .map(String::as_str)
        .unwrap_or("because");

    let rest = clauses[1..]
        .iter()
        .map(|clause| clause.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}, {connector} {rest}.", capitalize(&clauses[0]))
}

fn single_clause_fallback(text: &str, clauses: &[String]) -> String {
    match clauses.first() {
        Some(clause) => format!("{clause}."),
        None => text.to_string(),
    }
}

fn capitalize(clause: &str) -> String {
    let mut chars = clause.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
