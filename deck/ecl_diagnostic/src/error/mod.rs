//! Fatal deck errors.
//!
//! [`DeckErrorKind`] says what went wrong; [`DeckError`] adds where: the
//! keyword being read, the line and column, and the next unconsumed
//! character.

use std::fmt;

use crate::ErrorCode;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckErrorKind {
    /// Input ran out in the middle of a record.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A numeric record token is neither a number, `k*v`, `k*` nor `*`.
    #[error("malformed vector record: cannot read `{found}` as a value")]
    MalformedVectorRecord { found: String },

    /// Wrong field count, wrong field type, or an unexpected character
    /// between records.
    #[error("malformed record: {message}")]
    MalformedRecord { message: String },

    /// Values parsed cleanly but contradict each other physically.
    #[error("physical consistency violated: {message}")]
    PhysicalConsistency { message: String },

    /// No unit multiplier exists for the requested quantity.
    #[error("unsupported conversion: {message}")]
    UnsupportedConversion { message: String },
}

impl DeckErrorKind {
    pub fn malformed_vector(found: impl Into<String>) -> Self {
        DeckErrorKind::MalformedVectorRecord {
            found: found.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        DeckErrorKind::MalformedRecord {
            message: message.into(),
        }
    }

    pub fn inconsistent(message: impl Into<String>) -> Self {
        DeckErrorKind::PhysicalConsistency {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        DeckErrorKind::UnsupportedConversion {
            message: message.into(),
        }
    }

    /// Stable code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            DeckErrorKind::UnexpectedEndOfInput => ErrorCode::E0001,
            DeckErrorKind::MalformedVectorRecord { .. } => ErrorCode::E1001,
            DeckErrorKind::MalformedRecord { .. } => ErrorCode::E1002,
            DeckErrorKind::PhysicalConsistency { .. } => ErrorCode::E2001,
            DeckErrorKind::UnsupportedConversion { .. } => ErrorCode::E3001,
        }
    }
}

/// One-based line and column in the deck text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A fatal error with its reading context.
///
/// Context is attached with the builder methods as the error travels up:
/// the reader knows the position, the keyword parser knows its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckError {
    pub kind: DeckErrorKind,
    pub keyword: Option<String>,
    pub location: Option<Location>,
    pub next_char: Option<char>,
}

impl DeckError {
    pub fn new(kind: DeckErrorKind) -> Self {
        DeckError {
            kind,
            keyword: None,
            location: None,
            next_char: None,
        }
    }

    /// Name the keyword being read. An already named keyword is kept.
    #[must_use]
    pub fn in_keyword(mut self, keyword: impl Into<String>) -> Self {
        if self.keyword.is_none() {
            self.keyword = Some(keyword.into());
        }
        self
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_next_char(mut self, next: Option<char>) -> Self {
        self.next_char = next;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl From<DeckErrorKind> for DeckError {
    fn from(kind: DeckErrorKind) -> Self {
        DeckError::new(kind)
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code(), self.kind)?;
        if let Some(keyword) = &self.keyword {
            write!(f, " in {keyword}")?;
        }
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        if let Some(next) = self.next_char {
            write!(f, " (next character {next:?})")?;
        }
        Ok(())
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
