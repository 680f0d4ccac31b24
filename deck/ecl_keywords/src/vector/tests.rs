#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_diagnostic::ErrorCode;
use ecl_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use super::*;
use crate::{DeckReader, Defaulted};

fn read_into(source: &str, slots: &mut [f64]) -> Result<usize, ErrorCode> {
    let buf = SourceBuffer::new(source);
    let mut reader = DeckReader::new(buf.cursor());
    read_defaulted(&mut reader, slots).map_err(|e| e.code())
}

// === Items ===

#[test]
fn item_forms() {
    assert_eq!(VectorItem::<f64>::parse("2.5"), Some(VectorItem::Value(2.5)));
    assert_eq!(VectorItem::<f64>::parse("*"), Some(VectorItem::Defaults(1)));
    assert_eq!(VectorItem::<f64>::parse("3*"), Some(VectorItem::Defaults(3)));
    assert_eq!(
        VectorItem::<i32>::parse("4*7"),
        Some(VectorItem::Repeat(4, 7))
    );
    assert_eq!(VectorItem::<f64>::parse("0*"), None);
    assert_eq!(VectorItem::<f64>::parse("*5"), None);
    assert_eq!(VectorItem::<f64>::parse("OPEN"), None);
    assert_eq!(VectorItem::<i32>::parse("1.5"), None);
}

#[test]
fn fortran_exponents() {
    assert_eq!(f64::parse_deck("1.5D-3"), Some(1.5e-3));
    assert_eq!(f64::parse_deck("2d2"), Some(200.0));
    assert_eq!(f64::parse_deck("-1E20"), Some(-1.0e20));
    assert_eq!(f64::parse_deck("inf"), None);
    assert_eq!(f64::parse_deck("-nan"), None);
}

#[test]
fn default_counts() {
    assert_eq!(default_count("*"), Some(1));
    assert_eq!(default_count("6*"), Some(6));
    assert_eq!(default_count("6*1"), None);
    assert_eq!(default_count("ORAT"), None);
}

// === Reading ===

#[test]
fn full_read_leaves_terminator() {
    let buf = SourceBuffer::new("1 2 3 /\nNEXT");
    let mut reader = DeckReader::new(buf.cursor());
    let mut slots = [0.0; 3];
    assert_eq!(read_defaulted(&mut reader, &mut slots), Ok(3));
    assert_eq!(slots, [1.0, 2.0, 3.0]);
    assert!(reader.next_token().unwrap().is_terminator());
}

#[test]
fn early_terminator_consumes_line() {
    let buf = SourceBuffer::new("1 / ignored 7 8\n9");
    let mut reader = DeckReader::new(buf.cursor());
    let mut slots = [0.0; 3];
    assert_eq!(read_defaulted(&mut reader, &mut slots), Ok(1));
    assert_eq!(slots, [1.0, 0.0, 0.0]);
    assert_eq!(reader.next_token().unwrap().text, "9");
}

#[test]
fn terminator_glued_to_value() {
    let mut slots = [0.0; 4];
    assert_eq!(read_into("1 2.5/", &mut slots), Ok(2));
    assert_eq!(slots, [1.0, 2.5, 0.0, 0.0]);
}

#[test]
fn defaults_keep_slot_values() {
    let mut slots = [-1.0, -2.0, -3.0, -4.0];
    assert_eq!(read_into("2* 5 * /", &mut slots), Ok(4));
    assert_eq!(slots, [-1.0, -2.0, 5.0, -4.0]);
}

#[test]
fn defaulted_slots_keep_tag() {
    let buf = SourceBuffer::new("* 2 /");
    let mut reader = DeckReader::new(buf.cursor());
    let mut slots = [Defaulted::Default(1.0), Defaulted::Default(1.0)];
    read_defaulted(&mut reader, &mut slots).unwrap();
    assert_eq!(slots, [Defaulted::Default(1.0), Defaulted::Given(2.0)]);
}

#[test]
fn default_overrun_is_clamped() {
    let buf = SourceBuffer::new("1 5* /");
    let mut reader = DeckReader::new(buf.cursor());
    let mut slots = [0.0; 3];
    let run = read_defaulted_inner(&mut reader, &mut slots).unwrap();
    assert_eq!(
        run,
        VectorRun {
            visited: 3,
            overflow: 3,
            terminated: false
        }
    );
}

#[test]
fn repeat_overrun_is_malformed() {
    let mut slots = [0.0; 2];
    assert_eq!(read_into("3*1.0 /", &mut slots), Err(ErrorCode::E1001));
}

#[test]
fn garbage_and_quoted_tokens_are_malformed() {
    let mut slots = [0.0; 2];
    assert_eq!(read_into("1 abc /", &mut slots), Err(ErrorCode::E1001));
    assert_eq!(read_into("'1' /", &mut slots), Err(ErrorCode::E1001));
}

#[test]
fn exhausted_input() {
    let mut slots = [0.0; 3];
    assert_eq!(read_into("1 2", &mut slots), Err(ErrorCode::E0001));
}

#[test]
fn comments_inside_records() {
    let mut slots = [0.0; 3];
    assert_eq!(read_into("1 -- first\n-- more\n2 3", &mut slots), Ok(3));
    assert_eq!(slots, [1.0, 2.0, 3.0]);
}

#[test]
fn vector_until_terminator() {
    let buf = SourceBuffer::new("1 2*3.5\n 4 /\nX");
    let mut reader = DeckReader::new(buf.cursor());
    assert_eq!(read_vector::<f64>(&mut reader), Ok(vec![1.0, 3.5, 3.5, 4.0]));
    assert_eq!(reader.next_token().unwrap().text, "X");
}

#[test]
fn vector_rejects_defaults() {
    let buf = SourceBuffer::new("1 2* /");
    let mut reader = DeckReader::new(buf.cursor());
    let err = read_vector::<f64>(&mut reader).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn huge_default_count_is_malformed() {
    let mut slots = [0.0; 3];
    assert_eq!(
        read_into("1 18446744073709551615* /\n", &mut slots),
        Err(ErrorCode::E1001)
    );
    assert_eq!(slots, [1.0, 0.0, 0.0]);
}

#[test]
fn largest_default_count_overflows_without_wrapping() {
    let buf = SourceBuffer::new(&format!("1 {MAX_REPEAT}* /"));
    let mut reader = DeckReader::new(buf.cursor());
    let mut slots = [0.0; 3];
    let run = read_defaulted_inner(&mut reader, &mut slots).unwrap();
    assert_eq!(run.visited, 3);
    assert_eq!(run.overflow, MAX_REPEAT - 2);
}

#[test]
fn vector_rejects_huge_repeat() {
    let buf = SourceBuffer::new("40000000000*1.0 /");
    let mut reader = DeckReader::new(buf.cursor());
    let err = read_vector::<f64>(&mut reader).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.location.map(|l| l.line), Some(1));
}

mod proptest_vector {
    use proptest::prelude::*;

    use super::read_into;

    proptest! {
        #[test]
        fn repeat_fills_prefix(n in 1usize..8, extra in 0usize..5, v in -1.0e6f64..1.0e6) {
            let mut slots = vec![-7.0; n + extra];
            let source = format!("{n}*{v} /");
            let visited = read_into(&source, &mut slots);
            prop_assert_eq!(visited, Ok(n));
            for (i, slot) in slots.iter().enumerate() {
                if i < n {
                    prop_assert_eq!(*slot, v);
                } else {
                    prop_assert_eq!(*slot, -7.0);
                }
            }
        }

        #[test]
        fn early_stop_counts_visited(values in proptest::collection::vec(0i32..1000, 0..6)) {
            let mut slots = vec![0.0; values.len() + 2];
            let text: Vec<String> = values.iter().map(ToString::to_string).collect();
            let source = format!("{} /", text.join(" "));
            prop_assert_eq!(read_into(&source, &mut slots), Ok(values.len()));
        }
    }
}
