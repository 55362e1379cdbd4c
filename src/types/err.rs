//! Error types used in the library.
//!
//! Deriving functional dependencies never fails, and so the axioms and closures return their results directly.
//! Errors only arise when reading functional dependencies from some textual representation.
//
//  As with other modules, err::{self} is often used to prefix use of the types with `err::`.

/// The general error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The line with the given number could not be read.
    Read(usize),

    /// The functional dependency on the given line could not be parsed.
    Dependency(usize, ParseError),
}

/// Noted errors when parsing a functional dependency.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No `->` separating the left and right sides.
    MissingArrow,

    /// More than one `->`.
    MultipleArrows,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingArrow => write!(f, "missing '->'"),
            ParseError::MultipleArrows => write!(f, "more than one '->'"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Read(line) => write!(f, "failed to read line {line}"),
            ErrorKind::Dependency(line, e) => write!(f, "line {line}: {e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl std::error::Error for ErrorKind {}
