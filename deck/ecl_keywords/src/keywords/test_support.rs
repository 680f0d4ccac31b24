//! Shared helpers for keyword unit tests.

use ecl_diagnostic::DeckError;
use ecl_lexer_core::SourceBuffer;

use crate::{DeckReader, DeckWriter, SpecialKeyword};

/// Read `K` from a keyword body.
pub fn parse<K: SpecialKeyword>(body: &str) -> Result<K, DeckError> {
    let buf = SourceBuffer::new(body);
    let mut reader = DeckReader::new(buf.cursor());
    reader.enter_keyword(K::NAME);
    K::read(&mut reader)
}

/// Read `K`, and require that the rest of the body is `rest`.
pub fn parse_leaving<K: SpecialKeyword>(body: &str, rest: &str) -> Result<K, DeckError> {
    let buf = SourceBuffer::new(body);
    let mut reader = DeckReader::new(buf.cursor());
    let keyword = K::read(&mut reader)?;
    let mut cursor = reader.cursor();
    cursor.skip_trivia();
    let remaining = cursor.slice(cursor.pos(), cursor.source_len());
    assert_eq!(remaining, rest, "unconsumed text after {}", K::NAME);
    Ok(keyword)
}

/// Write `keyword`, then read back the body after the name line.
pub fn rewrite<K: SpecialKeyword>(keyword: &K) -> Result<K, DeckError> {
    let mut out = DeckWriter::new();
    keyword.write(&mut out);
    let text = out.output();
    let (name, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    assert_eq!(name, K::NAME);
    parse(body)
}

pub fn written<K: SpecialKeyword>(keyword: &K) -> String {
    let mut out = DeckWriter::new();
    keyword.write(&mut out);
    out.output()
}

pub fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(f64::MIN_POSITIVE)
}
