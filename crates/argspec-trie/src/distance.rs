//! Edit distance used to rank suggestions.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// Insertions, deletions and substitutions each cost one.
///
/// ```
/// use argspec_trie::edit_distance;
///
/// assert_eq!(edit_distance("instolll", "install"), 2);
/// assert_eq!(edit_distance("", "info"), 4);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// A word is close to a token when at most three quarters of the longer of
/// the two would have to be edited.
pub(crate) fn is_close(distance: usize, token_len: usize, word_len: usize) -> bool {
    distance * 4 <= token_len.max(word_len) * 3
}
