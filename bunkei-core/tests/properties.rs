//! Property tests over generated clause lists

use bunkei_core::english::converter;
use bunkei_core::{SentenceType, StructureProcessor};
use proptest::prelude::*;

// Connective-free vocabulary, so generated clauses never contain words the
// lexicon reacts to and the structural outcome is fully predictable.
static WORDS: &[&str] = &[
    "cats", "dogs", "rivers", "stars", "clocks", "purr", "bark", "flow", "shine", "tick",
    "slowly", "gently",
];

fn clause() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(WORDS), 2..4)
        .prop_map(|words| words.join(" "))
}

fn clause_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(clause(), 1..5)
}

/// Render a clause list as a run of unconnected sentences
fn as_sentences(clauses: &[String]) -> String {
    format!("{}.", clauses.join(". "))
}

proptest! {
    #[test]
    fn to_simple_preserves_clause_count(clauses in clause_list()) {
        let out = converter::to_simple("", &clauses);
        prop_assert_eq!(out.matches('.').count(), clauses.len());
        prop_assert!(!out.contains(".."));
        prop_assert!(out.ends_with('.'));
    }

    #[test]
    fn compound_conversion_round_trips(clauses in clause_list()) {
        let processor = StructureProcessor::new().unwrap();
        let text = as_sentences(&clauses);
        let out = processor.convert(&text, SentenceType::Compound);
        if clauses.len() >= 2 {
            prop_assert_eq!(processor.detect(&out), SentenceType::Compound);
        } else {
            prop_assert_eq!(processor.detect(&out), SentenceType::Simple);
        }
    }

    #[test]
    fn conversion_is_idempotent(clauses in clause_list()) {
        let processor = StructureProcessor::new().unwrap();
        let text = as_sentences(&clauses);
        for target in [
            SentenceType::Simple,
            SentenceType::Compound,
            SentenceType::Complex,
            SentenceType::CompoundComplex,
        ] {
            let once = processor.convert(&text, target);
            let twice = processor.convert(&once, target);
            prop_assert_eq!(&once, &twice);
        }
    }

    #[test]
    fn detection_never_panics_on_arbitrary_text(text in "\\PC{0,80}") {
        let processor = StructureProcessor::new().unwrap();
        let _ = processor.detect(&text);
        let _ = processor.convert(&text, SentenceType::Compound);
    }
}
