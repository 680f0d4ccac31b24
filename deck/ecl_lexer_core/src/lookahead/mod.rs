//! What comes after a record.
//!
//! Keywords such as DENSITY or PVTW have no record count of their own: they
//! keep reading rows until the next keyword name shows up. The decision is
//! made from the first significant byte after whitespace and comment lines.

use crate::Cursor;

/// Classification of the next significant byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookahead {
    /// Digit, sign, decimal point or `*`: another numeric row follows.
    Data,
    /// `'`: quoted string data follows.
    Quoted,
    /// Alphabetic: the next keyword name begins.
    Keyword,
    /// `/`: a bare terminator.
    Terminator,
    /// No more input.
    EndOfInput,
    /// Anything else.
    Other(u8),
}

impl Lookahead {
    /// Classify a single byte.
    pub fn of(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' | b'+' | b'-' | b'.' | b'*' => Lookahead::Data,
            b'\'' => Lookahead::Quoted,
            b'/' => Lookahead::Terminator,
            b if b.is_ascii_alphabetic() => Lookahead::Keyword,
            other => Lookahead::Other(other),
        }
    }

    /// `true` when the enclosing row loop should stop.
    pub fn ends_rows(self) -> bool {
        matches!(self, Lookahead::Keyword | Lookahead::EndOfInput)
    }
}

impl Cursor<'_> {
    /// Classify what follows, skipping whitespace and `--` comment lines.
    ///
    /// Nothing is consumed.
    pub fn lookahead(&self) -> Lookahead {
        let mut probe = *self;
        probe.skip_trivia();
        if probe.is_eof() {
            Lookahead::EndOfInput
        } else {
            Lookahead::of(probe.current())
        }
    }
}
