//! Property-based tests for the tree and trie using proptest.

use std::collections::HashSet;

use argspec_trie::{edit_distance, Tree, Trie};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z-]{1,10}"
}

fn build(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for word in words {
        trie.add(word).unwrap();
    }
    trie
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every added word is contained, and nothing else is listed.
    #[test]
    fn added_words_round_trip(words in prop::collection::vec(word_strategy(), 0..30)) {
        let trie = build(&words);

        for word in &words {
            prop_assert!(trie.contains(word));
        }

        let expected: HashSet<&String> = words.iter().collect();
        let listed = trie.words();
        let listed_set: HashSet<&String> = listed.iter().collect();
        prop_assert_eq!(listed.len(), expected.len());
        prop_assert_eq!(listed_set, expected.clone());
        prop_assert_eq!(trie.len(), expected.len());
    }

    /// Prefix retrieval only returns words starting with the consumed prefix.
    #[test]
    fn prefix_words_share_prefix(
        words in prop::collection::vec(word_strategy(), 1..30),
        prefix in "[a-z]{1,4}",
    ) {
        let trie = build(&words);
        let found = trie.words_with_prefix(&prefix);

        for word in &found {
            prop_assert!(trie.contains(word));
            prop_assert_eq!(word.chars().next(), prefix.chars().next());
        }
        for word in words.iter().filter(|w| w.starts_with(&prefix)) {
            prop_assert!(found.contains(word));
        }
    }

    /// Suggestions are never empty for a non-empty trie and are all stored words.
    #[test]
    fn suggestions_are_stored_words(
        words in prop::collection::vec(word_strategy(), 1..30),
        token in "[a-z]{0,12}",
    ) {
        let trie = build(&words);
        let suggestions = trie.suggest(&token);

        prop_assert!(!suggestions.is_empty());
        for word in &suggestions {
            prop_assert!(trie.contains(word));
        }
    }

    /// A stored word is always its own first suggestion.
    #[test]
    fn exact_word_suggests_itself(words in prop::collection::vec(word_strategy(), 1..30)) {
        let trie = build(&words);
        for word in &words {
            let suggestions = trie.suggest(word);
            prop_assert_eq!(&suggestions[0], word);
        }
    }

    /// Suggestions are ranked by non-decreasing distance.
    #[test]
    fn suggestions_are_ranked(
        words in prop::collection::vec(word_strategy(), 1..30),
        token in "[a-z]{1,12}",
    ) {
        let trie = build(&words);
        let all = trie.words();
        let suggestions = trie.suggest(&token);

        if suggestions != all {
            let distances: Vec<usize> = suggestions
                .iter()
                .map(|w| edit_distance(&token, w))
                .collect();
            prop_assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    /// Edit distance is a metric on the sampled strings.
    #[test]
    fn edit_distance_bounds(a in "[a-c]{0,8}", b in "[a-c]{0,8}") {
        let d = edit_distance(&a, &b);
        prop_assert_eq!(d, edit_distance(&b, &a));
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert_eq!(d == 0, a == b);
    }

    /// Node count and leaf count agree for chains built from arbitrary keys.
    #[test]
    fn tree_counts(keys in prop::collection::vec(0u8..16, 0..40)) {
        let mut tree = Tree::new(255u8, ());
        let root = tree.root();
        let mut distinct = HashSet::new();
        for key in &keys {
            let added = tree.add_child(root, *key, ()).is_some();
            prop_assert_eq!(added, distinct.insert(*key));
        }

        prop_assert_eq!(tree.node_count(), distinct.len() + 1);
        prop_assert_eq!(tree.height(), usize::from(!distinct.is_empty()));
        let expected_leaves = if distinct.is_empty() { 1 } else { distinct.len() };
        prop_assert_eq!(tree.leaf_data().len(), expected_leaves);
    }
}
