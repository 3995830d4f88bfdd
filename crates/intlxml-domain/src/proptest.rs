//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - legality classification of placeholders and literal text
//! - ignored subtrees never contributing leaves
//! - failure counting per document

use crate::collect::collect_leaves;
use crate::engine::{evaluate, evaluate_texts};
use crate::legality::is_legal;
use crate::model::Node;
use crate::policy::CollectOptions;
use crate::test_support::{batch, config, document, leaf, map, seq};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Text with no ASCII letters at all.
fn arb_letterless() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^a-zA-Z]{0,24}").unwrap()
}

/// Arbitrary printable text, letters included.
fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,32}").unwrap()
}

fn arb_letter() -> impl Strategy<Value = char> {
    prop::sample::select(
        ('a'..='z').chain('A'..='Z').collect::<Vec<char>>(),
    )
}

/// Keys that include the ignored tags and the attribute key.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("p".to_string()),
        Just("span".to_string()),
        Just("_".to_string()),
        Just("$".to_string()),
        Just("script".to_string()),
        Just("g:evaluate".to_string()),
        Just("g2:evaluate".to_string()),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf_strategy = prop_oneof![
        Just(Node::Null),
        arb_text().prop_map(Node::Leaf),
    ];
    leaf_strategy.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Sequence),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(Node::mapping),
        ]
    })
}

/// Reference count of leaves reachable without crossing an ignored or attribute key.
fn count_visible(node: &Node) -> usize {
    match node {
        Node::Null => 0,
        Node::Leaf(_) => 1,
        Node::Sequence(items) => items.iter().map(count_visible).sum(),
        Node::Mapping(entries) => entries
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "$" | "script" | "g:evaluate" | "g2:evaluate"))
            .map(|(_, v)| count_visible(v))
            .sum(),
    }
}

// ============================================================================
// Classifier properties
// ============================================================================

proptest! {
    #[test]
    fn letterless_text_is_always_legal(s in arb_letterless()) {
        prop_assert!(is_legal(&s));
    }

    #[test]
    fn full_mustache_expression_is_always_legal(inner in arb_text()) {
        let wrapped = format!("{{{{{inner}}}}}");
        prop_assert!(is_legal(&wrapped));
    }

    #[test]
    fn dollar_brace_prefix_is_always_legal(rest in arb_text()) {
        let s = format!("${{{rest}");
        prop_assert!(is_legal(&s));
    }

    #[test]
    fn letters_at_both_ends_are_always_illegal(
        first in arb_letter(),
        middle in arb_text(),
        last in arb_letter(),
    ) {
        let s = format!("{first}{middle}{last}");
        prop_assert!(!is_legal(&s));
    }

    #[test]
    fn classification_is_deterministic(s in arb_text()) {
        prop_assert_eq!(is_legal(&s), is_legal(&s));
    }
}

// ============================================================================
// Collector and evaluator properties
// ============================================================================

proptest! {
    #[test]
    fn collector_matches_reference_count(tree in arb_node()) {
        let leaves = collect_leaves(&tree, &CollectOptions::default());
        prop_assert_eq!(leaves.len(), count_visible(&tree));
    }

    #[test]
    fn ignored_subtree_contributes_nothing(hidden in arb_node(), visible in arb_node()) {
        let options = CollectOptions::default();
        let combined = map(vec![("script", hidden.clone()), ("p", visible.clone())]);
        let nested = map(vec![("g:evaluate", seq(vec![hidden])), ("p", visible.clone())]);

        let expected = collect_leaves(&visible, &options);
        prop_assert_eq!(collect_leaves(&combined, &options), expected.clone());
        prop_assert_eq!(collect_leaves(&nested, &options), expected);
    }

    #[test]
    fn failures_are_trimmed_illegal_inputs(texts in prop::collection::vec(arb_text(), 0..12)) {
        let failed = evaluate_texts(texts.iter().map(String::as_str));
        prop_assert!(failed.len() <= texts.len());
        for f in &failed {
            prop_assert_eq!(f.as_str(), f.trim());
            prop_assert!(!is_legal(f));
        }
    }

    #[test]
    fn a_document_fails_at_most_once(words in prop::collection::vec("[A-Za-z]{1,8}", 1..8)) {
        let tree = map(vec![(
            "page",
            seq(words.iter().map(|w| leaf(w)).collect()),
        )]);
        let report = evaluate(&batch(vec![document("page.xml", tree)]), &config());
        prop_assert_eq!(report.tally.documents_failed, 1);
        prop_assert_eq!(report.findings.len(), words.len());
        prop_assert_eq!(report.tally.outcome_code(), 1);
    }
}
