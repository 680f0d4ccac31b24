#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_diagnostic::ErrorCode;
use ecl_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use super::*;

fn scan(name: &str, body: &str) -> Result<(Ignored, String), DeckError> {
    let buf = SourceBuffer::new(body);
    let mut reader = DeckReader::new(buf.cursor());
    let ignored = Ignored::read_named(name, &mut reader)?;
    let cursor = reader.cursor();
    let rest = cursor.slice(cursor.pos(), cursor.source_len()).to_string();
    Ok((ignored, rest))
}

#[test]
fn numeric_table_up_to_next_keyword() {
    let (swfn, rest) = scan(
        "SWFN",
        "-- Sw krw Pc\n0.2 0 2\n0.8 1 0 /\n\nSOF2\n0 0\n1 1 /\n",
    )
    .unwrap();
    assert_eq!(swfn.name, "SWFN");
    assert_eq!(swfn.body, "-- Sw krw Pc\n0.2 0 2\n0.8 1 0 /");
    assert_eq!(rest, "SOF2\n0 0\n1 1 /\n");
}

#[test]
fn records_with_null_entries_and_quotes() {
    let body = "1 365 /\n/\n'A' 2* -1 /\n  TSTEP\n";
    let (tuning, rest) = scan("TUNING", body).unwrap();
    assert_eq!(tuning.body, "1 365 /\n/\n'A' 2* -1 /");
    assert_eq!(rest, "TSTEP\n");
}

#[test]
fn alphabetic_line_with_terminator_is_data() {
    let (kw, rest) = scan("RPTRST", "BASIC=2 /\nDATES\n").unwrap();
    assert_eq!(kw.body, "BASIC=2 /");
    assert_eq!(rest, "DATES\n");
}

#[test]
fn flat_keyword_has_empty_body() {
    let (kw, rest) = scan("OIL", "WATER\nGAS\n").unwrap();
    assert_eq!(kw.body, "");
    assert_eq!(rest, "WATER\nGAS\n");
    let mut out = DeckWriter::new();
    kw.write(&mut out);
    assert_eq!(out.output(), "OIL\n");
}

#[test]
fn data_running_to_end_of_input() {
    let (kw, rest) = scan("SOF2", "0 0\n1 1").unwrap();
    assert_eq!(kw.body, "0 0\n1 1");
    assert_eq!(rest, "");
}

#[test]
fn stray_character_is_malformed() {
    let err = scan("SWFN", "0.2 0 2 /\n# not deck\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn writes_body_back_verbatim() {
    let ignored = Ignored {
        name: "SWFN".to_string(),
        body: "0.2 0 2\n0.8 1 0 /".to_string(),
    };
    let mut out = DeckWriter::new();
    ignored.write(&mut out);
    assert_eq!(out.output(), "SWFN\n0.2 0 2\n0.8 1 0 /\n");
    assert!(Ignored::is_known("SWFN"));
    assert!(!Ignored::is_known("RPTRST"));
}
