//! Error types for parsing and formatting.
//!
//! Two failure surfaces: [`ParseError`] (bad pattern text, carries a
//! character offset) and [`FormatError`] (bad arguments or formatter
//! failure at evaluation time). [`MessageError`] is the umbrella the
//! facade returns. No silent recovery anywhere: a failing format call
//! produces no partial output.

use core::fmt;

/// A pattern failed to parse.
///
/// `offset` is a character index (not a byte index) into the pattern
/// source, pointing at or just after the offending construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at character {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// A parsed pattern failed to format against the supplied arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder names a format type with no registry entry.
    UnknownFormatter { name: String },
    /// The pattern references an argument the map does not contain.
    MissingArgument { name: String },
    /// An argument cannot be coerced to what its placeholder requires.
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
    /// A registered formatter reported failure.
    Formatter { name: String, message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormatter { name } => write!(f, "no formatter registered for type '{name}'"),
            Self::MissingArgument { name } => write!(f, "missing argument '{name}'"),
            Self::TypeMismatch { name, expected } => {
                write!(f, "argument '{name}' cannot be used as {expected}")
            }
            Self::Formatter { name, message } => {
                write!(f, "formatter '{name}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Attempted to replace one of the structural branching formatter types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryError {
    pub name: String,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot replace built-in branching type '{}'", self.name)
    }
}

impl std::error::Error for RegistryError {}

/// Umbrella error returned by the facade's format entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    Parse(ParseError),
    Format(FormatError),
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Format(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for MessageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<ParseError> for MessageError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<FormatError> for MessageError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
