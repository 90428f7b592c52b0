//! English clause segmentation
//!
//! Text is first split into sentences after runs of `.`, `!`, `?` followed
//! by whitespace (the punctuation stays attached to the preceding sentence),
//! then each sentence is split at connective words. Fragments are cleaned of
//! leading separators and trailing punctuation. Non-empty input always
//! produces at least one clause: when everything else fails, the whole text
//! is the clause.

use crate::lexicon::EnglishLexicon;

/// Split text into sentences, terminator runs kept on the left
pub fn split_sentences<'a>(text: &'a str, lexicon: &EnglishLexicon) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in lexicon.sentence_break().find_iter(text) {
        // cut after the terminator run, before the whitespace
        let punct_end = m.start() + m.as_str().trim_end().len();
        push_trimmed(&mut sentences, &text[start..punct_end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

/// Split text into an ordered clause list
pub fn split_clauses(text: &str, lexicon: &EnglishLexicon) -> Vec<String> {
    let mut clauses = Vec::new();
    for sentence in split_sentences(text, lexicon) {
        for fragment in lexicon.clause_split().split(sentence) {
            if let Some(clause) = clean_fragment(fragment) {
                clauses.push(clause);
            }
        }
    }
    if clauses.is_empty() {
        if let Some(clause) = clean_fragment(text) {
            clauses.push(clause);
        } else if !text.trim().is_empty() {
            clauses.push(text.trim().to_string());
        }
    }
    clauses
}

/// Strip leading separators, trailing punctuation and surrounding whitespace
fn clean_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment
        .trim()
        .trim_start_matches([',', ';'])
        .trim_end_matches(['.', ',', '!', '?', ';'])
        .trim();
    (!fragment.is_empty()).then(|| fragment.to_string())
}
