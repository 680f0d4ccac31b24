//! Whole-deck reading scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ecl_deck::keywords::{Density, Pvtw, Sgof, Specgrid, Swof, Wconinje};
use ecl_deck::{Deck, ErrorCode, Keyword, UnitMultipliers, UnitSystem};
use pretty_assertions::assert_eq;

#[test]
fn specgrid_with_terminator_on_its_own_line() {
    let deck = Deck::parse("SPECGRID\n10 10 5 1 F\n/\n").unwrap();
    let specgrid = deck.get::<Specgrid>().unwrap();
    assert_eq!(specgrid.dims(), [10, 10, 5]);
    assert_eq!(specgrid.numres, 1);
    assert_eq!(specgrid.coord, "F");
    assert!(!specgrid.is_radial());
}

#[test]
fn pvtw_under_si_baseline() {
    let mut deck = Deck::parse("PVTW\n300 1.0 1e-5 0.5 0.0\n/\n").unwrap();
    let record = deck.get::<Pvtw>().unwrap().records[0];
    assert_eq!(record.reference_pressure, 300.0);
    assert_eq!(record.volume_factor, 1.0);
    assert_eq!(record.compressibility, 1e-5);
    assert_eq!(record.viscosity, 0.5);
    assert_eq!(record.viscosibility, 0.0);

    deck.convert_to_si_with(&UnitMultipliers::identity()).unwrap();
    assert_eq!(deck.get::<Pvtw>().unwrap().records[0].reference_pressure, 300.0);
}

#[test]
fn density_rows_stop_at_next_keyword() {
    let text = "DENSITY\n900 1000 1\n900 1000 1\nSPECGRID\n1 1 1 /\n";
    let deck = Deck::parse(text).unwrap();
    let density = deck.get::<Density>().unwrap();
    assert_eq!(density.records.len(), 2);
    assert_eq!(density.records[1].water, 1000.0);
    assert!(deck.get::<Specgrid>().is_some());
}

#[test]
fn injection_rate_follows_injector_type() {
    let text = "\
FIELD
WCONINJE
 'G1' 'GAS'   'OPEN' 'RATE' 1000 /
 'W1' 'WATER' 'OPEN' 'RATE' 1000 /
/
";
    let mut deck = Deck::parse(text).unwrap();
    deck.convert_to_si().unwrap();
    let units = UnitSystem::Field.multipliers();
    let records = &deck.get::<Wconinje>().unwrap().records;
    assert_eq!(records[0].surface_rate, 1000.0 * units.gas_rate());
    assert_eq!(records[1].surface_rate, 1000.0 * units.liquid_rate());
    assert!(records[0].surface_rate.value() != records[1].surface_rate.value());
}

#[test]
fn unknown_keywords_are_kept_as_text() {
    let text = "\
RPTSCHED
 'FIP=2' 'WELLS' /
TUNING
 1 /
 /
 2* 50 /
SPECGRID
 3 3 1 /
";
    let deck = Deck::parse(text).unwrap();
    let names: Vec<&str> = deck.keywords().map(Keyword::name).collect();
    assert_eq!(names, ["RPTSCHED", "TUNING", "SPECGRID"]);
    match &deck.entries()[0].keyword {
        Keyword::Ignored(k) => assert_eq!(k.body, " 'FIP=2' 'WELLS' /"),
        other => panic!("expected an ignored keyword, got {other:?}"),
    }
    assert_eq!(Deck::parse(&deck.write().unwrap()).unwrap(), deck);
}

#[test]
fn saturation_end_points_must_agree() {
    let text = "\
SWOF
 0.2 0 1 0
 1.0 1 0 0 /
SGOF
 0.0 0 1 0
 0.7 1 0 0 /
";
    let err = Deck::parse(text).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.keyword.as_deref(), Some("SGOF"));

    let consistent = text.replace("0.7 1 0 0", "0.8 1 0 0");
    let deck = Deck::parse(&consistent).unwrap();
    assert_eq!(deck.get::<Swof>().unwrap().connate_water(0), Some(0.2));
    assert_eq!(deck.get::<Sgof>().unwrap().max_gas(0), Some(0.8));
}

#[test]
fn record_errors_name_keyword_and_line() {
    let err = Deck::parse("SPECGRID\n 1 1 1 /\nPVTW\n 100 abc 0 1 /\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.keyword.as_deref(), Some("PVTW"));
    assert_eq!(err.location.map(|l| l.line), Some(4));
}

#[test]
fn truncated_record_is_unexpected_end() {
    let err = Deck::parse("WCONINJE\n 'W1' 'WATER'").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.keyword.as_deref(), Some("WCONINJE"));
}
