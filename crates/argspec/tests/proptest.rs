//! Property-based tests for definitions and matching using proptest.

use std::collections::HashSet;
use std::sync::Arc;

use argspec::{tokenize, ErrorKind, Registry};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

fn alias_strategy() -> impl Strategy<Value = String> {
    "-{0,2}[a-z][a-z-]{0,8}"
}

fn list_suffix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("...")]
}

fn register_kind(definition: &str) -> Option<ErrorKind> {
    Registry::new().register(&[definition]).err().map(|e| e.kind())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An optional parameter followed by a required one is never accepted.
    #[test]
    fn optional_before_required_is_unsupported(
        first in name_strategy(),
        second in name_strategy(),
        first_list in list_suffix(),
        second_list in list_suffix(),
    ) {
        let definition = format!("cmd, ?{first}1{first_list}, !{second}2{second_list}");
        prop_assert_eq!(register_kind(&definition), Some(ErrorKind::Unsupported));
    }

    /// Two list parameters are never accepted, whatever their requiredness.
    #[test]
    fn two_lists_are_unsupported(
        first in name_strategy(),
        second in name_strategy(),
        first_prefix in prop_oneof![Just('!'), Just('?')],
        second_prefix in prop_oneof![Just('!'), Just('?')],
    ) {
        let definition = format!("cmd, {first_prefix}{first}1..., {second_prefix}{second}2...");
        prop_assert_eq!(register_kind(&definition), Some(ErrorKind::Unsupported));
    }

    /// Required parameters before optional ones are accepted.
    #[test]
    fn required_before_optional_is_accepted(
        required in prop::collection::vec(name_strategy(), 0..4),
        optional in prop::collection::vec(name_strategy(), 0..4),
    ) {
        let mut parts = vec!["cmd".to_string()];
        parts.extend(required.iter().enumerate().map(|(i, n)| format!("!{n}r{i}")));
        parts.extend(optional.iter().enumerate().map(|(i, n)| format!("?{n}o{i}")));

        prop_assert_eq!(register_kind(&parts.join(", ")), None);
    }

    /// Every alias resolves to the specification that declared it, and
    /// cannot be claimed twice.
    #[test]
    fn aliases_resolve_to_their_specification(
        aliases in prop::collection::hash_set(alias_strategy(), 1..10),
    ) {
        let mut registry = Registry::new();
        let mut specs = Vec::new();
        for alias in &aliases {
            specs.push((alias.clone(), registry.register(&[alias.as_str()]).unwrap()));
        }

        for (alias, spec) in &specs {
            prop_assert!(Arc::ptr_eq(registry.get(alias).unwrap(), spec));
            let err = registry.register(&[alias.as_str()]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Duplicate);
        }
        prop_assert_eq!(registry.len(), aliases.len());
    }

    /// Runtime tokens are trimmed, non-empty and free of delimiters.
    #[test]
    fn runtime_tokens_are_clean(
        args in prop::collection::vec("[a-z =,.-]{0,12}", 0..8),
    ) {
        for token in tokenize(&args) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains('='));
            prop_assert!(!token.contains(','));
        }
    }

    /// Entry boundaries only separate tokens, like a delimiter would.
    #[test]
    fn entries_split_like_delimiters(
        args in prop::collection::vec("[a-z=,]{0,12}", 0..8),
    ) {
        let joined = args.join(",");
        prop_assert_eq!(tokenize(&args), tokenize(&[joined]));
    }

    /// `-D<key>=<value>` is always an implicit command, registered or not.
    #[test]
    fn properties_need_no_registration(
        key in "[a-z][a-z.]{0,10}",
        value in prop_oneof!["[a-zA-Z0-9]{1,8}", "[a-z]{1,2}", "-D[a-z]{1,4}"],
        aliases in prop::collection::hash_set("[a-z]{1,2}", 0..5),
    ) {
        let mut registry = Registry::new();
        for alias in &aliases {
            registry.register(&[alias.as_str()]).unwrap();
        }

        let commands = registry.parse(&[format!("-D{key}={value}")]).unwrap();

        prop_assert_eq!(commands.len(), 1);
        prop_assert!(commands[0].is_implicit());
        let expected_name = format!("-D{key}");
        prop_assert_eq!(commands[0].name(), expected_name.as_str());
        prop_assert_eq!(commands[0].value(&key), Some(value.as_str()));
    }

    /// Unknown tokens always come back with registered aliases to try.
    #[test]
    fn unknown_tokens_get_registered_suggestions(
        aliases in prop::collection::hash_set("[a-z]{1,8}", 1..8),
        token in "[a-z]{1,10}",
    ) {
        prop_assume!(!aliases.contains(&token));

        let mut registry = Registry::new();
        for alias in &aliases {
            registry.register(&[alias.as_str()]).unwrap();
        }

        let err = registry.parse(&[token.as_str()]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Unsupported);

        let suggestions = err.suggestions();
        prop_assert!(!suggestions.is_empty());
        let unique: HashSet<&String> = suggestions.iter().collect();
        prop_assert_eq!(unique.len(), suggestions.len());
        for suggestion in suggestions {
            prop_assert!(aliases.contains(suggestion));
        }
    }
}
