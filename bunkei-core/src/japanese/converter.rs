//! Japanese structural converters

use super::segmenter::strip_trailing_mark;

/// Render every clause as its own `。`-terminated sentence
pub fn to_simple(text: &str, clauses: &[String]) -> String {
    if clauses.is_empty() {
        return text.to_string();
    }
    clauses
        .iter()
        .map(|clause| format!("{}。", strip_trailing_mark(clause)))
        .collect()
}

/// Join all clauses with `、そして` into one compound sentence
pub fn to_compound(text: &str, clauses: &[String]) -> String {
    if clauses.len() <= 1 {
        return text.to_string();
    }
    let joined = clauses
        .iter()
        .map(|clause| strip_trailing_mark(clause))
        .collect::<Vec<_>>()
        .join("、そして");
    format!("{joined}。")
}

/// Fold the clauses into `first、だから rest…。`
pub fn to_complex(text: &str, clauses: &[String]) -> String {
    if clauses.len() <= 1 {
        return text.to_string();
    }
    let first = strip_trailing_mark(&clauses[0]);
    let rest = clauses[1..]
        .iter()
        .map(|clause| strip_trailing_mark(clause))
        .collect::<Vec<_>>()
        .join("、");
    format!("{first}、だから{rest}。")
}
