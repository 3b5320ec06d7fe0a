//! Definition tokenizer.
//!
//! Turns raw definition strings such as `"-f, --file, !fileName, #Load a file"`
//! into typed [`Token`]s. Only per-token checks happen here; the rules that
//! relate tokens to each other live in the specification builder.

use crate::error::Result;
use crate::token::Token;
use crate::tokenizer::split_pieces;

/// Splits definition strings on `=` and `,` and types every piece.
///
/// ```
/// use argspec::{tokenize_definition, TokenKind};
///
/// let tokens = tokenize_definition(&["file , !fileName1,:file\\d.txt, #Load files"], 1000).unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Alias,
///         TokenKind::RequiredValue,
///         TokenKind::RegexValidator,
///         TokenKind::Description,
///     ]
/// );
/// ```
pub fn tokenize_definition<S: AsRef<str>>(definitions: &[S], max_length: usize) -> Result<Vec<Token>> {
    split_pieces(definitions.iter().map(AsRef::as_ref))
        .map(|piece| Token::classify(piece, max_length))
        .collect()
}
