use proptest::prelude::*;

use wordmap_core::aggregate::Aggregator;
use wordmap_core::lexicon::{Filtered, Lexicon};
use wordmap_core::loader;
use wordmap_core::tokenize::Tokenizer;
use wordmap_core::types::IssueRecord;

const BANNED_SAMPLE: &[&str] = &[
    "github", "issue", "university", "workshop", "instance", "the", "and",
    "with", "orcid", "morphocloud",
];

const VARIANTS: &[(&str, &str)] = &[
    ("segment", "segmentation"),
    ("segments", "segmentation"),
    ("segmenting", "segmentation"),
    ("morphometric", "morphometrics"),
];

fn mixed_case(word: &str, flips: &[bool]) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if flips.get(i).copied().unwrap_or(false) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn banned_words_excluded_regardless_of_case(
        index in 0usize..BANNED_SAMPLE.len(),
        flips in proptest::collection::vec(any::<bool>(), 0..12),
    ) {
        let lexicon = Lexicon::builtin();
        let token = mixed_case(BANNED_SAMPLE[index], &flips);
        prop_assert!(
            matches!(lexicon.filter(&token), Filtered::Excluded(_)),
            "{token} should be excluded"
        );
    }

    #[test]
    fn unification_never_returns_the_variant(
        index in 0usize..VARIANTS.len(),
        flips in proptest::collection::vec(any::<bool>(), 0..12),
    ) {
        let lexicon = Lexicon::builtin();
        let (variant, canonical) = VARIANTS[index];
        let token = mixed_case(variant, &flips);
        match lexicon.filter(&token) {
            Filtered::Keyword(keyword) => {
                prop_assert_eq!(keyword.as_str(), canonical);
                prop_assert_ne!(keyword.as_str(), variant);
            }
            Filtered::Excluded(reason) => {
                prop_assert!(false, "{} unexpectedly excluded: {:?}", variant, reason);
            }
        }
    }

    #[test]
    fn kept_keywords_are_always_lowercase(word in "[A-Za-z]{3,12}") {
        let lexicon = Lexicon::builtin();
        if let Filtered::Keyword(keyword) = lexicon.filter(&word) {
            prop_assert_eq!(keyword.clone(), keyword.to_lowercase());
        }
    }

    #[test]
    fn table_total_equals_kept_token_count(
        words in proptest::collection::vec("[a-z]{3,10}", 0..150),
    ) {
        let lexicon = Lexicon::builtin();
        let issue = IssueRecord {
            number: 1,
            title: "Issue".to_string(),
            body: Some(words.join(" ")),
        };

        let tokenizer = Tokenizer::new(3);
        let text = loader::issue_text(&issue);
        let kept = tokenizer
            .tokenize(&text)
            .filter(|t| matches!(lexicon.filter(t), Filtered::Keyword(_)))
            .count() as u64;

        let report = Aggregator::new(3, &lexicon).run(&[issue], 0);
        prop_assert_eq!(report.stats.total_occurrences, kept);
        let summed: u64 = report.frequencies.iter().map(|(_, c)| c).sum();
        prop_assert_eq!(summed, kept);
    }
}
