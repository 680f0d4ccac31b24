//! Keywords without a grammar of their own.
//!
//! The body is scanned line by line up to the next keyword name and kept as
//! raw text, so writing the deck back reproduces it.

use ecl_diagnostic::DeckError;
use tracing::trace;

use crate::{DeckReader, DeckWriter};

/// Keywords that are expected in a deck and deliberately not interpreted.
const KNOWN: &[&str] = &["SWFN", "SOF2", "TUNING"];

/// A keyword kept as raw text.
#[derive(Clone, Debug, PartialEq)]
pub struct Ignored {
    pub name: String,
    /// Body lines, without the trailing whitespace.
    pub body: String,
}

impl Ignored {
    /// `true` for keywords skipped on purpose, as opposed to unknown ones.
    pub fn is_known(name: &str) -> bool {
        KNOWN.contains(&name)
    }

    /// Scan past the body of keyword `name`.
    ///
    /// A line whose first character is alphabetic starts the next keyword,
    /// unless the line holds a `/`. Numeric and quoted data runs through the
    /// next line with a `/`; comment lines and bare `/` lines are skipped.
    /// Anything else is `MalformedRecord`.
    pub fn read_named(name: &str, reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let start = reader.pos();
        let mut end = start;
        loop {
            let cursor = reader.cursor_mut();
            cursor.skip_whitespace();
            if cursor.is_eof() {
                break;
            }
            match cursor.current() {
                b'-' if cursor.at_comment() => cursor.skip_to_end_of_line(),
                b'/' => cursor.skip_to_end_of_line(),
                b if b.is_ascii_alphabetic() => {
                    if !cursor.line_has_terminator() {
                        break;
                    }
                    cursor.skip_to_end_of_line();
                }
                b'0'..=b'9' | b'.' | b'+' | b'-' | b'*' | b'\'' => {
                    while !cursor.is_eof() {
                        let terminated = cursor.line_has_terminator();
                        cursor.skip_to_end_of_line();
                        if terminated {
                            break;
                        }
                    }
                }
                other => {
                    return Err(reader.malformed(format!(
                        "unexpected character {:?} in skipped keyword",
                        char::from(other)
                    )));
                }
            }
            end = reader.pos();
        }
        let body = reader
            .text(start, end)
            .trim_start_matches(['\n', '\r'])
            .trim_end()
            .to_string();
        trace!(keyword = name, bytes = body.len(), "kept raw keyword body");
        Ok(Ignored {
            name: name.to_string(),
            body,
        })
    }

    pub fn write(&self, out: &mut DeckWriter) {
        out.keyword(&self.name);
        if !self.body.is_empty() {
            out.line(&self.body);
        }
    }
}

#[cfg(test)]
mod tests;
