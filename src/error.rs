//! Contains the `Error` type shared by the parser and the value accessors.
use std::fmt;
use thiserror::Error as ThisError;

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The distinguishable kinds of failure.
///
/// The first fourteen kinds are raised by the parser and by the typed
/// accessors. `IndexOutOfRange` and `KeyNotFound` report a checked lookup
/// that missed, so callers can tell a miss apart from a `BadType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
pub enum ErrorKind {
    /// The document does not start with `{` or `[`.
    #[error("format not json")]
    NotJson,
    /// Something other than whitespace follows the root value.
    #[error("root not one")]
    RootNotOne,
    /// An object key is not followed by `:`.
    #[error("miss colon")]
    MissColon,
    /// A value was expected but a separator or closer was found.
    #[error("miss value")]
    MissValue,
    /// An object member is not followed by `,` or `}`.
    #[error("lack ',' or '}}'")]
    LackCommaOrBrace,
    /// An array element is not followed by `,` or `]`.
    #[error("lack ',' or ']'")]
    LackCommaOrBracket,
    /// An object key is not a quoted string.
    #[error("bad key")]
    BadKey,
    /// A value starts with a character no production accepts.
    #[error("bad value")]
    BadValue,
    /// The input ended inside a string or a structure.
    #[error("unexpected end of json text")]
    JsonLength,
    /// A backslash is followed by something that is not a valid escape.
    #[error("bad escape")]
    BadEscape,
    /// Text starting with `t` or `f` is not `true` or `false`.
    #[error("bad boolean")]
    BadBoolean,
    /// Text starting with `n` is not `null`.
    #[error("bad null")]
    BadNull,
    /// Text does not match the number grammar.
    #[error("bad number")]
    BadNumber,
    /// A typed accessor was used on a value of another type.
    #[error("bad type")]
    BadType,
    /// A checked array access used an index past the end.
    #[error("index out of range")]
    IndexOutOfRange,
    /// A checked object access used a key that is not present.
    #[error("key not found")]
    KeyNotFound,
    /// Arrays and objects are nested deeper than the configured limit.
    #[error("nesting too deep")]
    NestingTooDeep,
    /// The input is larger than the configured limit.
    #[error("input too large")]
    InputTooLarge,
}

/// The error type for all fallible operations in this crate.
///
/// Parse failures carry the 1-indexed line and column where the violation
/// was detected. Accessor failures have no position. Only the parser
/// attaches a position; callers can build unlocated errors from a kind:
///
/// ```
/// use plain_json::{Error, ErrorKind};
///
/// let error = Error::from(ErrorKind::BadType);
/// assert_eq!(error.line(), None);
/// ```
///
/// ```compile_fail
/// use plain_json::{Error, ErrorKind};
///
/// let located = Error::at(ErrorKind::BadKey, 1, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    position: Option<(usize, usize)>,
}

impl Error {
    /// Creates an error with no source position.
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind,
            position: None,
        }
    }

    /// Creates an error located at `line` and `column` of the input.
    pub(crate) fn at(kind: ErrorKind, line: usize, column: usize) -> Self {
        Error {
            kind,
            position: Some((line, column)),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The 1-indexed line of a parse failure.
    pub fn line(&self) -> Option<usize> {
        self.position.map(|(line, _)| line)
    }

    /// The 1-indexed column of a parse failure.
    pub fn column(&self) -> Option<usize> {
        self.position.map(|(_, column)| column)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((line, column)) => {
                write!(f, "{} at line {}, column {}", self.kind, line, column)
            }
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
