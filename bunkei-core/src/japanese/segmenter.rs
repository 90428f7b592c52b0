//! Japanese clause segmentation
//!
//! Token surface forms are accumulated into a buffer that is flushed as a
//! clause at the sentence-final mark `。`, after a conjunctive particle
//! (`し`/`て`) directly followed by `、`, or at a bare `、`. A single
//! trailing `。`/`、` is stripped from each clause.

use super::token::Token;

/// Group a token stream into an ordered clause list
///
/// Without tokens the whole text is returned as a single clause.
pub fn split_clauses(text: &str, tokens: Option<&[Token]>) -> Vec<String> {
    let tokens = match tokens {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => return whole_text_clause(text),
    };

    let mut clauses = Vec::new();
    let mut buffer = String::new();
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        buffer.push_str(&token.surface);

        if token.surface == "。" {
            flush(&mut buffer, &mut clauses);
        } else if matches!(token.surface.as_str(), "し" | "て")
            && tokens.get(index + 1).is_some_and(|next| next.surface == "、")
        {
            // the clause-final comma belongs to this clause
            buffer.push('、');
            flush(&mut buffer, &mut clauses);
            index += 1;
        } else if token.surface == "、" {
            flush(&mut buffer, &mut clauses);
        }

        index += 1;
    }

    if !buffer.trim().is_empty() {
        flush(&mut buffer, &mut clauses);
    }

    if clauses.is_empty() {
        return whole_text_clause(text);
    }
    clauses
}

fn flush(buffer: &mut String, clauses: &mut Vec<String>) {
    let clause = strip_trailing_mark(buffer.trim());
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }
    buffer.clear();
}

/// Strip one trailing `。` or `、`
pub(crate) fn strip_trailing_mark(text: &str) -> &str {
    text.strip_suffix(['。', '、']).unwrap_or(text)
}

fn whole_text_clause(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}
