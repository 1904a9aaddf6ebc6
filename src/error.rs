//! Errors raised while loading style sheets.

use std::path::PathBuf;

use thiserror::Error;

/// What went wrong while parsing rule-block text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `{`, `[` or `(` was never closed.
    #[error("unclosed '{open}'")]
    UnclosedBlock { open: char },
    /// A closing bracket without a matching opener.
    #[error("unexpected '{close}'")]
    UnexpectedClose { close: char },
    /// A `/*` comment runs to the end of the input.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A quoted string runs to the end of its line.
    #[error("unterminated string")]
    UnterminatedString,
    /// A rule block with nothing in front of its `{`.
    #[error("rule has an empty selector")]
    EmptySelector,
    /// A selector that does not follow the selector grammar.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    /// A selector list that is not followed by a `{ ... }` block.
    #[error("expected '{{' after selector")]
    MissingBlock,
    /// `@` rules are not part of the format.
    #[error("unsupported at-rule '@{0}'")]
    UnsupportedAtRule(String),
    /// A declaration that is not `property: value`.
    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),
    /// A declaration with nothing after the colon.
    #[error("property '{property}' has no value")]
    EmptyValue { property: String },
    /// A value that could not be understood for a property.
    #[error("invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },
    /// A function call in a value that is not part of the format.
    #[error("unknown function '{0}()'")]
    UnknownFunction(String),
    /// A property name rejected by [`PropertyPolicy::KnownOnly`](crate::PropertyPolicy).
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
    /// A token that cannot appear where it was found.
    #[error("unexpected {0}")]
    UnexpectedToken(String),
    /// The input ended in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Error returned when rule-block text is malformed.
///
/// Lines and columns are 1-based and point at the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error returned when a style sheet file cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read style sheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse style sheet {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The parse error behind this failure, if the file was readable.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Io { .. } => None,
        }
    }
}
