//! Runtime argument tokenizer.
//!
//! An argument vector is treated as one stream split on `=` and `,`. The
//! shell's own word boundaries are kept as well, so these are equivalent:
//!
//! ```text
//! ["-f=file1.txt,file2.txt"]
//! ["-f", "=", "file1.txt", ",", "file2.txt"]
//! ["-f", "file1.txt", "file2.txt"]
//! ```

/// Separates a command from its first value.
pub const VALUE_DELIMITER: char = '=';

/// Separates consecutive values.
pub const LIST_DELIMITER: char = ',';

/// Splits each entry on `=`, then each piece on `,`, trimming surrounding
/// whitespace and dropping empty pieces.
pub(crate) fn split_pieces<'a, I>(entries: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .flat_map(|entry| entry.split(VALUE_DELIMITER))
        .flat_map(|piece| piece.split(LIST_DELIMITER))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// Splits an argument vector into plain tokens.
///
/// ```
/// use argspec::tokenize;
///
/// let tokens = tokenize(&["-file", "file1.txt", "-Dorg.x.debug=true"]);
/// assert_eq!(tokens, vec!["-file", "file1.txt", "-Dorg.x.debug", "true"]);
/// ```
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    split_pieces(args.iter().map(AsRef::as_ref))
        .map(String::from)
        .collect()
}
