use super::*;
use gcount_core::Strategy as CountStrategy;
use proptest::prelude::*;

// Property: both strategies agree on arbitrary text when fed ICU data
proptest! {
    #[test]
    fn prop_icu_strategies_agree(s in any::<String>()) {
        let counter = shared_counter().unwrap();
        prop_assert_eq!(
            counter.count_with(&s, CountStrategy::Scan),
            counter.count_with(&s, CountStrategy::Pattern)
        );
    }
}

// Property: the free function matches the shared counter
proptest! {
    #[test]
    fn prop_grapheme_count_matches_counter(s in "\\PC*") {
        let counter = shared_counter().unwrap();
        prop_assert_eq!(grapheme_count(&s), counter.count(&s));
    }
}

// Property: counting never exceeds the code point length
proptest! {
    #[test]
    fn prop_count_bounded_by_length(s in "[a-z\\x{300}-\\x{36F}\\x{900}-\\x{97F}]{0,32}") {
        prop_assert!(grapheme_count(&s) <= s.chars().count());
    }
}

// Property: marks added after a base never change the count
proptest! {
    #[test]
    fn prop_trailing_marks_are_absorbed(
        s in "[a-z]{1,8}",
        marks in prop::collection::vec(prop::sample::select(vec!['\u{301}', '\u{93F}', '\u{20DD}']), 0..6),
    ) {
        let before = grapheme_count(&s);
        let mut with_marks = s.clone();
        with_marks.extend(marks);
        prop_assert_eq!(grapheme_count(&with_marks), before);
    }
}

// Property: classification is deterministic
proptest! {
    #[test]
    fn prop_classification_deterministic(ch in any::<char>()) {
        let classifier = IcuMarkClassifier::new();
        prop_assert_eq!(classifier.is_mark(ch), classifier.is_mark(ch));
        prop_assert_eq!(icu_mark_table().is_mark(ch), classifier.is_mark(ch));
    }
}
