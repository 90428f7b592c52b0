//! Japanese sentence-type detection
//!
//! A single pass over the token stream looks for subordinating and
//! coordinating markers. Subordination always wins; the taxonomy has no
//! Compound & Complex case in Japanese. Without tokens the result is Simple.

use super::token::{Token, POS_CONJUNCTION, POS_CONJUNCTIVE_PARTICLE};
use crate::types::SentenceType;

/// Classify the structural type of a Japanese token stream
pub fn detect(tokens: Option<&[Token]>) -> SentenceType {
    let Some(tokens) = tokens else {
        return SentenceType::Simple;
    };

    let mut has_subordinate = false;
    let mut has_coordinate = false;

    for token in tokens {
        let surface = token.surface.as_str();

        if matches!(surface, "から" | "ので") {
            has_subordinate = true;
        }

        if matches!(surface, "して" | "し" | "そして" | "それから")
            || (token.pos == POS_CONJUNCTIVE_PARTICLE && surface == "て")
            || (token.pos == POS_CONJUNCTION && matches!(surface, "そして" | "それから"))
        {
            has_coordinate = true;
        }
    }

    if has_subordinate {
        SentenceType::Complex
    } else if has_coordinate {
        SentenceType::Compound
    } else {
        SentenceType::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::japanese::token::Token;

    fn noun(surface: &str) -> Token {
        Token::new(surface, "名詞")
    }

    #[test]
    fn no_tokens_is_simple() {
        assert_eq!(detect(None), SentenceType::Simple);
        assert_eq!(detect(Some(&[])), SentenceType::Simple);
    }

    #[test]
    fn kara_makes_it_complex() {
        let tokens = vec![noun("雨だ"), Token::new("から", POS_CONJUNCTIVE_PARTICLE), noun("いた")];
        assert_eq!(detect(Some(&tokens)), SentenceType::Complex);
    }

    #[test]
    fn node_makes_it_complex_regardless_of_pos() {
        // surface form alone is enough
        let tokens = vec![noun("暑い"), noun("ので"), noun("休む")];
        assert_eq!(detect(Some(&tokens)), SentenceType::Complex);
    }

    #[test]
    fn soshite_makes_it_compound() {
        let tokens = vec![noun("起きた"), Token::new("そして", POS_CONJUNCTION), noun("食べた")];
        assert_eq!(detect(Some(&tokens)), SentenceType::Compound);
    }

    #[test]
    fn te_requires_conjunctive_particle_pos() {
        // a bare て with a non-particle tag does not coordinate
        let tokens = vec![noun("食べ"), noun("て"), noun("寝た")];
        assert_eq!(detect(Some(&tokens)), SentenceType::Simple);

        let tokens = vec![
            noun("食べ"),
            Token::new("て", POS_CONJUNCTIVE_PARTICLE),
            noun("寝た"),
        ];
        assert_eq!(detect(Some(&tokens)), SentenceType::Compound);
    }

    #[test]
    fn subordination_beats_coordination() {
        // both marker kinds present: Complex wins
        let tokens = vec![
            noun("起き"),
            Token::new("て", POS_CONJUNCTIVE_PARTICLE),
            noun("眠い"),
            Token::new("から", POS_CONJUNCTIVE_PARTICLE),
            noun("休む"),
        ];
        assert_eq!(detect(Some(&tokens)), SentenceType::Complex);

        // order of appearance does not matter
        let tokens = vec![
            noun("眠い"),
            Token::new("から", POS_CONJUNCTIVE_PARTICLE),
            noun("起き"),
            Token::new("そして", POS_CONJUNCTION),
            noun("休む"),
        ];
        assert_eq!(detect(Some(&tokens)), SentenceType::Complex);
    }

    #[test]
    fn plain_sentences_are_simple() {
        let tokens = vec![noun("猫"), noun("が"), noun("いる"), noun("。")];
        assert_eq!(detect(Some(&tokens)), SentenceType::Simple);
    }
}
