//! Character trie with prefix and typo-tolerant lookups.
//!
//! The [`Trie`] is a [`Tree`] keyed by `char`: every path from the root spells
//! a word, and the node holding the last character is flagged as a word end.

use tracing::debug;

use crate::distance::{edit_distance, is_close};
use crate::error::{Result, TrieError};
use crate::tree::{NodeId, Tree};

/// Key stored at the root. The root never ends a word.
pub const ROOT_KEY: char = '*';

/// A dictionary of words supporting prefix retrieval and "did you mean"
/// suggestions.
///
/// # Example
///
/// ```
/// use argspec_trie::Trie;
///
/// let mut trie = Trie::new();
/// for word in ["file", "help", "quit", "install", "info"] {
///     trie.add(word).unwrap();
/// }
///
/// assert!(trie.contains("info"));
/// assert!(!trie.contains("inf"));
/// assert_eq!(trie.words_with_prefix("in"), vec!["install", "info"]);
/// assert_eq!(trie.suggest("instolll"), vec!["install"]);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    tree: Tree<char, bool>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie {
            tree: Tree::new(ROOT_KEY, false),
            len: 0,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree<char, bool> {
        &self.tree
    }

    /// Stores `word`. Adding a word twice has no further effect.
    pub fn add(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut node = self.tree.root();
        for ch in word.chars() {
            node = self
                .tree
                .child_or_insert_with(node, ch, || false)
                .ok_or(TrieError::DetachedNode)?;
        }

        if let Some(is_word) = self.tree.meta_mut(node) {
            if !*is_word {
                *is_word = true;
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Returns true if `word` was added.
    pub fn contains(&self, word: &str) -> bool {
        let (node, consumed) = self.walk(word);
        !word.is_empty()
            && consumed.len() == word.len()
            && self.tree.meta(node).copied().unwrap_or(false)
    }

    /// Every stored word, in trie order.
    pub fn words(&self) -> Vec<String> {
        self.collect_words(self.tree.root(), String::new())
    }

    /// Words reachable through `prefix`.
    ///
    /// The prefix is followed as far as the trie allows; the words below the
    /// node reached are returned. `"hel111"` therefore yields the same words
    /// as `"hel"`. A non-empty prefix sharing no character with any word
    /// yields nothing.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let (node, consumed) = self.walk(prefix);
        if consumed.is_empty() && !prefix.is_empty() {
            return Vec::new();
        }
        self.collect_words(node, consumed)
    }

    /// Words that `token` was probably meant to be.
    ///
    /// The token is followed down the trie as far as it shares a prefix with
    /// the stored words. The words below that point are ranked by
    /// [`edit_distance`] and kept when close enough to the token. When the
    /// token shares nothing with any word, or no candidate is close, every
    /// stored word is returned instead.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        let (anchor, shared) = self.walk(token);
        if shared.is_empty() {
            debug!(token, "no shared prefix, suggesting every word");
            return self.words();
        }

        let token_len = token.chars().count();
        let mut scored: Vec<(usize, String)> = self
            .collect_words(anchor, shared)
            .into_iter()
            .map(|word| (edit_distance(token, &word), word))
            .filter(|(distance, word)| is_close(*distance, token_len, word.chars().count()))
            .collect();

        if scored.is_empty() {
            debug!(token, "no close candidate, suggesting every word");
            return self.words();
        }

        scored.sort_by_key(|(distance, _)| *distance);
        debug!(token, count = scored.len(), "ranked suggestions");
        scored.into_iter().map(|(_, word)| word).collect()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        let root = self.tree.root();
        self.tree.remove_children(root);
        self.len = 0;
    }

    /// Follows `input` from the root for as long as matching children exist.
    fn walk(&self, input: &str) -> (NodeId, String) {
        let mut node = self.tree.root();
        let mut consumed = String::new();
        for ch in input.chars() {
            match self.tree.child(node, &ch) {
                Some(next) => {
                    node = next;
                    consumed.push(ch);
                }
                None => break,
            }
        }
        (node, consumed)
    }

    fn collect_words(&self, start: NodeId, prefix: String) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![(start, prefix)];

        while let Some((node, spelled)) = stack.pop() {
            if self.tree.meta(node).copied().unwrap_or(false) {
                words.push(spelled.clone());
            }
            for child in self.tree.children(node).iter().rev() {
                if let Some(ch) = self.tree.key(*child) {
                    let mut next = spelled.clone();
                    next.push(*ch);
                    stack.push((*child, next));
                }
            }
        }

        words
    }
}
