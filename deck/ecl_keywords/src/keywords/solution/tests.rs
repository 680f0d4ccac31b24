#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_units::UnitSystem;
use pretty_assertions::assert_eq;

use super::*;
use crate::keywords::test_support::{parse, parse_leaving, rel_close, rewrite, written};

#[test]
fn equil_rows_per_region() {
    let equil: Equil = parse_leaving(
        "-- datum  p    woc   pc  goc\n 2000 200 2100 0 1900 0 1 0 /\n 2050 205 2150 /\nRSVD\n",
        "RSVD\n",
    )
    .unwrap();
    assert_eq!(equil.records.len(), 2);
    let first = &equil.records[0];
    assert_eq!(first.gas_oil_contact, 1900.0);
    assert_eq!(first.live_oil_init, Defaulted::Given(1));
    assert_eq!(first.accuracy, Defaulted::Default(0));
    assert!(equil.records[1].gas_oil_contact.is_default());
    assert_eq!(rewrite(&equil).unwrap(), equil);
}

#[test]
fn equil_writes_defaults_as_stars() {
    let equil: Equil = parse("2000 200 /").unwrap();
    assert_eq!(
        written(&equil),
        "EQUIL\n2000 200 1* 1* 1* 1* 1* 1* 1* /\n"
    );
}

#[test]
fn equil_alternates_depth_and_pressure() {
    let mut equil: Equil = parse("2000 200 2100 0.5 /").unwrap();
    let field = UnitSystem::Field.multipliers();
    equil.convert_to_si(&field).unwrap();
    let r = &equil.records[0];
    assert!(rel_close(*r.datum_depth, 2000.0 * field.length));
    assert!(rel_close(*r.datum_pressure, 200.0 * field.pressure));
    assert!(rel_close(*r.water_oil_contact, 2100.0 * field.length));
    assert!(rel_close(*r.water_oil_capillary_pressure, 0.5 * field.pressure));
    assert_eq!(r.live_oil_init, 0);
}
