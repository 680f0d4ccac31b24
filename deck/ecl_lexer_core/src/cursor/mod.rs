//! Byte cursor over a sentinel-terminated deck buffer.
//!
//! End of input is the sentinel byte (`0x00`) at or past `source_len`.
//! Every deck-level lexical primitive lives here so that keyword readers
//! never index the buffer themselves.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so lookahead is done on a copy and discarded.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all later bytes are `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// What kind of text a [`RawToken`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawTokenKind {
    /// Whitespace-delimited token.
    Bare,
    /// `'...'` token; `text` excludes the quotes.
    Quoted,
    /// `'...` with no closing quote before the end of the line.
    UnterminatedQuote,
}

/// One token read from the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub kind: RawTokenKind,
    /// Byte offset of the first character (the quote for quoted tokens).
    pub start: u32,
}

impl RawToken<'_> {
    /// The record terminator `/`.
    pub fn is_terminator(&self) -> bool {
        self.kind == RawTokenKind::Bare && self.text == "/"
    }

    /// A token that starts a `--` comment.
    pub fn is_comment(&self) -> bool {
        self.kind == RawTokenKind::Bare && self.text.starts_with("--")
    }

    /// `true` for tokens written inside quotes.
    pub fn is_quoted(&self) -> bool {
        self.kind != RawTokenKind::Bare
    }
}

/// One-based line and column of a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Bytes that end a bare token.
#[inline]
fn is_token_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'/' | 0)
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding back every read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Token boundaries always fall on ASCII delimiters, so slices of the
    /// original `&str` stay valid UTF-8. A slice that is not (only possible
    /// after truncating an oversized deck) comes back empty.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if self.is_eof() {
            return;
        }
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    // --- Deck primitives ---

    /// Advance past the rest of the current line, including its `\n`.
    pub fn skip_to_end_of_line(&mut self) {
        self.eat_until_newline_or_eof();
        if self.current() == b'\n' {
            self.advance();
        }
    }

    /// Advance past spaces, tabs, carriage returns and newlines.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// `true` when the cursor sits on `--`.
    #[inline]
    pub fn at_comment(&self) -> bool {
        self.current() == b'-' && self.peek() == b'-'
    }

    /// Skip whitespace and whole `--` comment lines.
    pub fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            if self.at_comment() {
                self.skip_to_end_of_line();
            } else {
                break;
            }
        }
    }

    /// The next non-whitespace byte, without consuming anything.
    ///
    /// Returns `0x00` at end of input. Comments are *not* skipped: a
    /// returned `-` may start a `--` comment or a negative number.
    pub fn peek_significant(&self) -> u8 {
        let mut probe = *self;
        probe.skip_whitespace();
        if probe.is_eof() {
            0
        } else {
            probe.current()
        }
    }

    /// Consume one token, or return `None` at end of input.
    ///
    /// Quoted tokens stop at the closing quote; a quote left open runs to the
    /// end of the line and is reported as [`RawTokenKind::UnterminatedQuote`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn read_token(&mut self) -> Option<RawToken<'a>> {
        self.skip_whitespace();
        if self.is_eof() {
            return None;
        }
        let start = self.pos;
        match self.current() {
            b'\'' => {
                self.advance();
                let body = self.pos;
                let remaining = &self.buf[body as usize..self.source_len as usize];
                match memchr::memchr2(b'\'', b'\n', remaining) {
                    Some(offset) if remaining[offset] == b'\'' => {
                        let end = body + offset as u32;
                        self.pos = end + 1;
                        Some(RawToken {
                            text: self.slice(body, end),
                            kind: RawTokenKind::Quoted,
                            start,
                        })
                    }
                    found => {
                        self.pos = found.map_or(self.source_len, |offset| body + offset as u32);
                        Some(RawToken {
                            text: self.slice_from(body).trim_end_matches('\r'),
                            kind: RawTokenKind::UnterminatedQuote,
                            start,
                        })
                    }
                }
            }
            b'/' => {
                self.advance();
                Some(RawToken {
                    text: self.slice_from(start),
                    kind: RawTokenKind::Bare,
                    start,
                })
            }
            _ => {
                self.eat_while(|b| !is_token_delimiter(b));
                if self.pos == start {
                    // Interior NUL byte: hand it out as a one-byte token.
                    self.advance();
                }
                Some(RawToken {
                    text: self.slice_from(start),
                    kind: RawTokenKind::Bare,
                    start,
                })
            }
        }
    }

    /// Consume the rest of the current line and return it without the
    /// line ending.
    pub fn read_line(&mut self) -> &'a str {
        let start = self.pos;
        self.eat_until_newline_or_eof();
        let line = self.slice_from(start).trim_end_matches('\r');
        if self.current() == b'\n' {
            self.advance();
        }
        line
    }

    /// `true` if the rest of the current line contains a `/`.
    pub fn line_has_terminator(&self) -> bool {
        let mut probe = *self;
        let start = probe.pos;
        probe.eat_until_newline_or_eof();
        memchr::memchr(b'/', &self.buf[start as usize..probe.pos as usize]).is_some()
    }

    /// One-based line and column of the current position.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line counts are bounded by source_len which fits in u32"
    )]
    pub fn line_col(&self) -> LineCol {
        let consumed = &self.buf[..self.pos.min(self.source_len) as usize];
        let line = memchr::memchr_iter(b'\n', consumed).count() as u32 + 1;
        let line_start = memchr::memrchr(b'\n', consumed).map_or(0, |nl| nl + 1);
        LineCol {
            line,
            column: (consumed.len() - line_start) as u32 + 1,
        }
    }
}
