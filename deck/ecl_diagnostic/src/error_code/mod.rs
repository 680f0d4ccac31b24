//! Error codes for deck diagnostics.
//!
//! The first digit names the stage that failed.

use std::fmt;

/// Error codes for deck diagnostics.
///
/// Format: E#### where first digit indicates the stage:
/// - E0xxx: Lexical errors
/// - E1xxx: Record grammar errors
/// - E2xxx: Physical consistency errors
/// - E3xxx: Unit conversion errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Input exhausted in the middle of a record
    E0001,
    /// Token is neither a number, a repetition nor a default marker
    E1001,
    /// Wrong field count or type for a keyword's layout
    E1002,
    /// Parsed values violate a physical invariant
    E2001,
    /// No multiplier mapping for the requested conversion
    E3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E3001,
    ];

    /// The code as it appears in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
        }
    }

    /// Lexical failure (E0xxx).
    pub fn is_lexical_error(&self) -> bool {
        matches!(self, ErrorCode::E0001)
    }

    /// Record grammar failure (E1xxx).
    pub fn is_grammar_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Failure detected after a record parsed cleanly (E2xxx, E3xxx).
    pub fn is_semantic_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
