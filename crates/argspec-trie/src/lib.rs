//! Ordered keyed trees and a suggestion trie for command-line vocabularies.
//!
//! This crate provides the data structures behind "did you mean" guidance:
//!
//! - [`Tree`]: an arena-backed tree whose children are indexed by key and
//!   kept in insertion order
//! - [`Trie`]: a `char`-keyed tree storing words, with exact, prefix and
//!   typo-tolerant lookups
//! - [`edit_distance`]: the Levenshtein distance used to rank suggestions
//!
//! # Quick Start
//!
//! ```rust
//! use argspec_trie::Trie;
//!
//! let mut trie = Trie::new();
//! for alias in ["file", "help", "quit", "install", "info"] {
//!     trie.add(alias).unwrap();
//! }
//!
//! // Close to "install" and "info", both reachable through "in"
//! assert_eq!(trie.suggest("inztolll"), vec!["install", "info"]);
//!
//! // Nothing in common: every word is offered
//! assert_eq!(trie.suggest("znstolll").len(), 5);
//! ```
//!
//! # Suggestion Semantics
//!
//! ```text
//! anchor     = deepest trie node reachable by following the token
//! candidates = words below anchor
//! close      = edit_distance(token, word) * 4 <= max(len(token), len(word)) * 3
//! result     = close candidates by distance, ties in trie order
//!              (every word when the anchor is the root or nothing is close)
//! ```

mod distance;
mod error;
mod tree;
mod trie;

pub use distance::edit_distance;
pub use error::{Result, TrieError};
pub use tree::{NodeId, Tree};
pub use trie::{Trie, ROOT_KEY};
