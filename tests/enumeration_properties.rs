//! Property-based tests for qualifier enumeration
//!
//! These tests verify invariants that should hold for all axis sets:
//! - The product has exactly the expected size with no duplicates
//! - Enumeration order is nested, first axis slowest
//! - Re-enumerating yields the same sequence
//! - Formatted strings never carry whitespace artifacts

use proptest::prelude::*;
use qualgen::qualifiers::{combinations, format_qualifiers, QualifierAxis};
use qualgen::GeneratorConfig;
use std::collections::HashSet;

/// Generate an axis: the empty token plus up to three distinct words
fn axis_strategy() -> impl Strategy<Value = QualifierAxis> {
    prop::collection::hash_set("[a-z&]{1,6}", 0..4).prop_map(|words| {
        let mut tokens = vec![String::new()];
        tokens.extend(words);
        QualifierAxis::new("axis", tokens)
    })
}

fn axes_strategy() -> impl Strategy<Value = Vec<QualifierAxis>> {
    prop::collection::vec(axis_strategy(), 0..5)
}

#[test]
fn test_builtin_product_is_complete_and_unique() {
    let config = GeneratorConfig::default();
    let produced: Vec<Vec<&str>> = config
        .combinations()
        .map(|combination| combination.tokens().to_vec())
        .collect();

    let mut expected = Vec::new();
    for cv in ["", "const", "volatile", "const volatile"] {
        for reference in ["", "&", "&&"] {
            for noexcept in ["", "noexcept"] {
                expected.push(vec![cv, reference, noexcept]);
            }
        }
    }

    assert_eq!(produced.len(), 24);
    assert_eq!(produced, expected);
}

#[test]
fn test_builtin_qualifier_strings_are_distinct() {
    let config = GeneratorConfig::default();
    let strings: HashSet<String> = config
        .combinations()
        .map(|combination| format_qualifiers(&combination))
        .collect();

    assert_eq!(strings.len(), 24);
    assert!(strings.contains(""));
    assert!(strings.contains("const volatile && noexcept"));
}

proptest! {
    /// Property: the product size is the product of axis sizes and every
    /// combination appears exactly once
    #[test]
    fn prop_product_is_exhaustive_without_duplicates(axes in axes_strategy()) {
        let expected: usize = axes.iter().map(QualifierAxis::len).product();
        let produced: Vec<Vec<&str>> = combinations(&axes)
            .map(|combination| combination.tokens().to_vec())
            .collect();
        let unique: HashSet<&Vec<&str>> = produced.iter().collect();

        prop_assert_eq!(produced.len(), expected);
        prop_assert_eq!(unique.len(), expected);
    }

    /// Property: consecutive combinations are in lexicographic order of
    /// per-axis token indices
    #[test]
    fn prop_enumeration_is_nested_order(axes in axes_strategy()) {
        let indices: Vec<Vec<usize>> = combinations(&axes)
            .map(|combination| {
                combination
                    .tokens()
                    .iter()
                    .zip(&axes)
                    .map(|(token, axis)| axis.tokens().position(|t| t == *token).unwrap())
                    .collect()
            })
            .collect();

        for pair in indices.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Property: enumeration is restartable and deterministic
    #[test]
    fn prop_enumeration_is_repeatable(axes in axes_strategy()) {
        let first: Vec<_> = combinations(&axes).collect();
        let second: Vec<_> = combinations(&axes).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: formatted strings have no leading, trailing, or doubled spaces
    #[test]
    fn prop_formatting_is_whitespace_clean(axes in axes_strategy()) {
        for combination in combinations(&axes) {
            let qualifiers = format_qualifiers(&combination);
            prop_assert!(!qualifiers.starts_with(' '));
            prop_assert!(!qualifiers.ends_with(' '));
            prop_assert!(!qualifiers.contains("  "));
        }
    }
}
