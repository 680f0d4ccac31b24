#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_diagnostic::ErrorCode;
use ecl_lexer_core::{Lookahead, SourceBuffer};
use pretty_assertions::assert_eq;

use super::DeckReader;

#[test]
fn comments_are_skipped_between_tokens() {
    let buf = SourceBuffer::new("1 -- one\n-- whole line\n 2 /");
    let mut reader = DeckReader::new(buf.cursor());
    assert_eq!(reader.next_token().map(|t| t.text), Ok("1"));
    assert_eq!(reader.next_token().map(|t| t.text), Ok("2"));
    assert!(reader.next_token().is_ok_and(|t| t.is_terminator()));
}

#[test]
fn end_of_input_is_an_error() {
    let buf = SourceBuffer::new("  \n");
    let mut reader = DeckReader::new(buf.cursor());
    reader.enter_keyword("PVTW");
    let err = reader.next_token().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.keyword.as_deref(), Some("PVTW"));
}

#[test]
fn error_carries_position_and_next_char() {
    let buf = SourceBuffer::new("DENSITY\n  #");
    let mut reader = DeckReader::new(buf.cursor());
    reader.enter_keyword("DENSITY");
    reader.skip_rest_of_line();
    let err = reader.classify_next().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.next_char, Some('#'));
    let location = err.location.unwrap();
    assert_eq!((location.line, location.column), (2, 3));
}

#[test]
fn classify_next_stops_on_keyword() {
    let buf = SourceBuffer::new("\n-- c\nPVTW\n");
    let mut reader = DeckReader::new(buf.cursor());
    assert_eq!(reader.classify_next(), Ok(Lookahead::Keyword));
    assert_eq!(reader.next_token().map(|t| t.text), Ok("PVTW"));
}

#[test]
fn consume_terminator_only_when_present() {
    let buf = SourceBuffer::new(" / trailing text\n1 2");
    let mut reader = DeckReader::new(buf.cursor());
    assert!(reader.consume_terminator());
    assert!(!reader.consume_terminator());
    assert_eq!(reader.next_token().map(|t| t.text), Ok("1"));
}

#[test]
fn expect_terminator_rejects_data() {
    let buf = SourceBuffer::new("5 /");
    let mut reader = DeckReader::new(buf.cursor());
    assert_eq!(
        reader.expect_terminator().map_err(|e| e.code()),
        Err(ErrorCode::E1002)
    );
}

#[test]
fn peek_token_does_not_consume() {
    let buf = SourceBuffer::new("'W1' 2");
    let mut reader = DeckReader::new(buf.cursor());
    assert_eq!(reader.peek_token().map(|t| t.text), Some("W1"));
    assert_eq!(reader.next_token().map(|t| t.text), Ok("W1"));
}
