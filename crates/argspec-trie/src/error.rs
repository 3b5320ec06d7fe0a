//! Error types for the trie crate.

use thiserror::Error;

/// Errors that can occur when indexing words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// An empty string cannot be stored as a word.
    #[error("word cannot be empty")]
    EmptyWord,

    /// A node handle no longer points into the trie's tree.
    #[error("node is no longer part of the trie")]
    DetachedNode,
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
