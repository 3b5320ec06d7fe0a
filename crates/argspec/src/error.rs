//! Error types for definition and parsing.

use std::fmt;

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Every error is an input-correctness problem; none is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or oversized input, or a validator that does not compile.
    InvalidArgument,
    /// Something required was not supplied.
    Missing,
    /// Something that must be unique was repeated.
    Duplicate,
    /// Input the grammar does not support.
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::Missing => write!(f, "missing"),
            ErrorKind::Duplicate => write!(f, "duplicate"),
            ErrorKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Errors raised while registering a definition or parsing arguments.
#[derive(Debug, Error)]
pub enum Error {
    /// No definition text was supplied.
    #[error("definition cannot be empty")]
    EmptyDefinition,

    /// A definition token has no text after its prefix.
    #[error("definition token '{0}' has no text")]
    EmptyToken(String),

    /// A definition token exceeds the configured maximum length.
    #[error("definition token is {length} characters long, the maximum is {max}")]
    TokenTooLong { length: usize, max: usize },

    /// The regex validator does not compile.
    #[error("invalid validator pattern: {0}")]
    InvalidValidator(#[from] regex::Error),

    /// An alias could not be indexed for suggestions.
    #[error("cannot index alias: {0}")]
    Index(#[from] argspec_trie::TrieError),

    /// A definition names no command.
    #[error("definition does not name a command")]
    MissingAlias,

    /// A required parameter received no acceptable value.
    #[error("command '{command}' requires a value for '{parameter}'")]
    MissingValue { command: String, parameter: String },

    /// An alias is repeated within a definition or already registered.
    #[error("command '{0}' is already defined")]
    DuplicateAlias(String),

    /// A definition carries more than one description.
    #[error("definition has more than one description")]
    DuplicateDescription,

    /// A definition carries more than one regex validator.
    #[error("definition has more than one validator")]
    DuplicateValidator,

    /// A parameter name is repeated within a definition.
    #[error("parameter '{0}' is defined more than once")]
    DuplicateParameter(String),

    /// Definition text that is not split into tokens by `,` or `=`.
    #[error("'{0}' is not a delimited definition")]
    UndelimitedDefinition(String),

    /// A required parameter follows an optional one.
    #[error("required parameter '{0}' cannot follow an optional parameter")]
    RequiredAfterOptional(String),

    /// A definition declares more than one list parameter.
    #[error("list parameter '{0}' conflicts with an earlier list parameter")]
    MultipleLists(String),

    /// A runtime token matches no command.
    #[error("unknown command '{token}'{}", did_you_mean(.suggestions))]
    UnknownToken {
        token: String,
        suggestions: Vec<String>,
    },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

impl Error {
    /// The broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyDefinition
            | Error::EmptyToken(_)
            | Error::TokenTooLong { .. }
            | Error::InvalidValidator(_)
            | Error::Index(_) => ErrorKind::InvalidArgument,
            Error::MissingAlias | Error::MissingValue { .. } => ErrorKind::Missing,
            Error::DuplicateAlias(_)
            | Error::DuplicateDescription
            | Error::DuplicateValidator
            | Error::DuplicateParameter(_) => ErrorKind::Duplicate,
            Error::UndelimitedDefinition(_)
            | Error::RequiredAfterOptional(_)
            | Error::MultipleLists(_)
            | Error::UnknownToken { .. } => ErrorKind::Unsupported,
        }
    }

    /// Commands the user may have meant. Empty unless a runtime token was not
    /// recognized.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Error::UnknownToken { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    pub(crate) fn missing_value(command: impl Into<String>, parameter: impl Into<String>) -> Self {
        Error::MissingValue {
            command: command.into(),
            parameter: parameter.into(),
        }
    }
}

/// Result type for definition and parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
