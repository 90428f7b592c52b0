//! English sentence-type detection
//!
//! Clause count alone cannot tell Compound from Complex, so detection also
//! looks at connective presence. The first rule keeps an unconnected run of
//! short sentences from being mislabeled as compound or complex.

use super::segmenter::{split_clauses, split_sentences};
use crate::lexicon::EnglishLexicon;
use crate::types::SentenceType;

/// Classify the structural type of English text. First matching rule wins.
pub fn detect(text: &str, lexicon: &EnglishLexicon) -> SentenceType {
    let sentence_count = split_sentences(text, lexicon).len();
    let clause_count = split_clauses(text, lexicon).len();
    let has_subordinating = lexicon.has_subordinating(text);
    let has_coordinating = lexicon.has_coordinating(text);

    if sentence_count >= 2
        && clause_count == sentence_count
        && !has_coordinating
        && !has_subordinating
    {
        return SentenceType::Simple;
    }

    if clause_count >= 2 && has_subordinating && has_coordinating {
        SentenceType::CompoundComplex
    } else if clause_count >= 2 && has_subordinating {
        SentenceType::Complex
    } else if clause_count >= 2 {
        SentenceType::Compound
    } else {
        SentenceType::Simple
    }
}
