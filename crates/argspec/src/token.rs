//! Definition tokens.
//!
//! Each piece of a definition is typed by its first character:
//!
//! | Prefix | Kind |
//! |---|---|
//! | *(none)* | [`TokenKind::Alias`] |
//! | `#` | [`TokenKind::Description`] |
//! | `!` | [`TokenKind::RequiredValue`], or [`TokenKind::RequiredList`] with a `...` suffix |
//! | `?` | [`TokenKind::OptionalValue`], or [`TokenKind::OptionalList`] with a `...` suffix |
//! | `:` | [`TokenKind::RegexValidator`] |

use crate::error::{Error, Result};

const DESCRIPTION_PREFIX: char = '#';
const REQUIRED_PREFIX: char = '!';
const OPTIONAL_PREFIX: char = '?';
const VALIDATOR_PREFIX: char = ':';
const LIST_SUFFIX: &str = "...";

/// What a definition token declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name the command can be invoked by.
    Alias,
    /// Human-readable description.
    Description,
    /// A parameter taking exactly one value.
    RequiredValue,
    /// A parameter taking zero or one value.
    OptionalValue,
    /// A parameter taking one or more values.
    RequiredList,
    /// A parameter taking any number of values.
    OptionalList,
    /// Pattern every value must match.
    RegexValidator,
}

impl TokenKind {
    /// Returns true for the four parameter kinds.
    pub fn is_parameter(self) -> bool {
        matches!(
            self,
            TokenKind::RequiredValue
                | TokenKind::OptionalValue
                | TokenKind::RequiredList
                | TokenKind::OptionalList
        )
    }

    /// Returns true for required parameters.
    pub fn is_required(self) -> bool {
        matches!(self, TokenKind::RequiredValue | TokenKind::RequiredList)
    }

    /// Returns true for list parameters.
    pub fn is_list(self) -> bool {
        matches!(self, TokenKind::RequiredList | TokenKind::OptionalList)
    }
}

/// A typed piece of a definition, with its prefix and list suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Types `piece` by its prefix.
    ///
    /// Fails when the piece is longer than `max_length` characters or has no
    /// text once the prefix and suffix are removed.
    ///
    /// ```
    /// use argspec::{Token, TokenKind};
    ///
    /// let token = Token::classify("?fileNames...", 1000).unwrap();
    /// assert_eq!(token, Token::new(TokenKind::OptionalList, "fileNames"));
    /// ```
    pub fn classify(piece: &str, max_length: usize) -> Result<Token> {
        let length = piece.chars().count();
        if length > max_length {
            return Err(Error::TokenTooLong {
                length,
                max: max_length,
            });
        }

        let mut chars = piece.chars();
        let token = match chars.next() {
            None => return Err(Error::EmptyToken(piece.to_string())),
            Some(DESCRIPTION_PREFIX) => Token::new(TokenKind::Description, chars.as_str()),
            Some(VALIDATOR_PREFIX) => Token::new(TokenKind::RegexValidator, chars.as_str()),
            Some(REQUIRED_PREFIX) => value_token(chars.as_str(), true),
            Some(OPTIONAL_PREFIX) => value_token(chars.as_str(), false),
            Some(_) => Token::new(TokenKind::Alias, piece),
        };

        if token.text.is_empty() {
            return Err(Error::EmptyToken(piece.to_string()));
        }
        Ok(token)
    }
}

fn value_token(rest: &str, required: bool) -> Token {
    let (name, list) = match rest.strip_suffix(LIST_SUFFIX) {
        Some(name) => (name, true),
        None => (rest, false),
    };
    let kind = match (required, list) {
        (true, false) => TokenKind::RequiredValue,
        (true, true) => TokenKind::RequiredList,
        (false, false) => TokenKind::OptionalValue,
        (false, true) => TokenKind::OptionalList,
    };
    Token::new(kind, name)
}
