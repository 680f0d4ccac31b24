//! Keyword-aware wrapper around the deck cursor.
//!
//! Every keyword parser receives a `&mut DeckReader`. Besides forwarding the
//! cursor primitives it knows which keyword is being read, so that every
//! error it builds already names the keyword, the position and the next
//! character.

use ecl_diagnostic::{DeckError, DeckErrorKind, Location};
use ecl_lexer_core::{Cursor, Lookahead, RawToken};
use tracing::trace;

/// Cursor plus the name of the keyword being read.
#[derive(Clone, Debug)]
pub struct DeckReader<'a> {
    cursor: Cursor<'a>,
    keyword: Option<&'a str>,
}

impl<'a> DeckReader<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        DeckReader {
            cursor,
            keyword: None,
        }
    }

    /// The underlying cursor (a copy; moving it does not move the reader).
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    pub fn keyword(&self) -> Option<&'a str> {
        self.keyword
    }

    /// Name the keyword whose records follow.
    pub fn enter_keyword(&mut self, name: &'a str) {
        trace!(keyword = name, pos = self.cursor.pos(), "entering keyword");
        self.keyword = Some(name);
    }

    pub fn leave_keyword(&mut self) {
        self.keyword = None;
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Deck text from `start` up to `end`.
    pub fn text(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    pub fn location(&self) -> Location {
        let lc = self.cursor.line_col();
        Location {
            line: lc.line,
            column: lc.column,
        }
    }

    /// Build an error at the current position.
    pub fn error(&self, kind: DeckErrorKind) -> DeckError {
        let next = match self.cursor.peek_significant() {
            0 => None,
            b => Some(char::from(b)),
        };
        let err = DeckError::new(kind).at(self.location()).with_next_char(next);
        match self.keyword {
            Some(name) => err.in_keyword(name),
            None => err,
        }
    }

    pub fn malformed(&self, message: impl Into<String>) -> DeckError {
        self.error(DeckErrorKind::malformed(message))
    }

    pub fn unexpected_end(&self) -> DeckError {
        self.error(DeckErrorKind::UnexpectedEndOfInput)
    }

    // --- Tokens ---

    /// Next token, skipping `--` comments. `None` at end of input.
    pub fn try_next_token(&mut self) -> Option<RawToken<'a>> {
        loop {
            let token = self.cursor.read_token()?;
            if token.is_comment() {
                self.cursor.skip_to_end_of_line();
                continue;
            }
            return Some(token);
        }
    }

    /// Next token, skipping `--` comments.
    pub fn next_token(&mut self) -> Result<RawToken<'a>, DeckError> {
        self.try_next_token().ok_or_else(|| self.unexpected_end())
    }

    /// The next token without consuming it.
    pub fn peek_token(&self) -> Option<RawToken<'a>> {
        let mut probe = self.clone();
        probe.try_next_token()
    }

    /// Discard the rest of the current line.
    pub fn skip_rest_of_line(&mut self) {
        self.cursor.skip_to_end_of_line();
    }

    /// The rest of the current line, without its line ending.
    pub fn read_line(&mut self) -> &'a str {
        self.cursor.read_line()
    }

    /// The next significant byte, `0` at end of input. Nothing is consumed.
    pub fn peek_significant(&self) -> u8 {
        self.cursor.peek_significant()
    }

    pub fn skip_trivia(&mut self) {
        self.cursor.skip_trivia();
    }

    // --- Record structure ---

    /// Skip whitespace and comment lines, then classify what follows.
    ///
    /// `Keyword` and `EndOfInput` end a row loop. A byte that can start
    /// neither data, a terminator nor a keyword is `MalformedRecord`.
    pub fn classify_next(&mut self) -> Result<Lookahead, DeckError> {
        self.cursor.skip_trivia();
        match self.cursor.lookahead() {
            Lookahead::Other(byte) => Err(self.malformed(format!(
                "unexpected character {:?} between records",
                char::from(byte)
            ))),
            next => Ok(next),
        }
    }

    /// Consume a `/` and the rest of its line if one comes next.
    pub fn consume_terminator(&mut self) -> bool {
        self.cursor.skip_trivia();
        if self.cursor.current() == b'/' && !self.cursor.is_eof() {
            self.cursor.skip_to_end_of_line();
            true
        } else {
            false
        }
    }

    /// Require a `/` next; consume it and the rest of its line.
    pub fn expect_terminator(&mut self) -> Result<(), DeckError> {
        let token = self.next_token()?;
        if token.is_terminator() {
            self.cursor.skip_to_end_of_line();
            Ok(())
        } else {
            Err(self.malformed(format!("expected `/`, found `{}`", token.text)))
        }
    }
}

#[cfg(test)]
mod tests;
