#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_units::{UnitMultipliers, UnitSystem};
use pretty_assertions::assert_eq;

use super::*;
use crate::keywords::test_support::{parse, rel_close, rewrite, written};

#[test]
fn gconinje_rate_follows_injector_type() {
    let mut gconinje: Gconinje =
        parse("'FIELD' 'WATER' 'RATE' 5000 /\n'G2' GAS VREP 1* 1* 1* 1.0 /\n/\n").unwrap();
    assert_eq!(gconinje.records[0].surface_rate, Defaulted::Given(5000.0));
    assert_eq!(gconinje.records[0].voidage_fraction, Defaulted::Default(NO_LIMIT));
    assert_eq!(gconinje.records[1].voidage_fraction, 1.0);
    assert_eq!(rewrite(&gconinje).unwrap(), gconinje);

    let mut units = UnitMultipliers::identity();
    units.liqvol_s = 0.5;
    units.gasvol_s = 4.0;
    gconinje.convert_to_si(&units).unwrap();
    assert_eq!(gconinje.records[0].surface_rate, 2500.0);
    assert_eq!(gconinje.records[1].surface_rate, NO_LIMIT * 4.0);
}

#[test]
fn gconprod_skips_six_items() {
    let gconprod: Gconprod = parse(
        "'G1' 'ORAT' 1000 1* 1* 1* 'RATE' 1 2 3 4 5 6 2000 /\n\
         'G2' 'LRAT' 4* 'WELL' 6* 300 /\n\
         'G3' 2* 500 /\n\
         /\n",
    )
    .unwrap();
    let g1 = &gconprod.records[0];
    assert_eq!(g1.control, "ORAT");
    assert_eq!(g1.oil_rate, 1000.0);
    assert_eq!(g1.procedure, "RATE");
    assert_eq!(g1.reservoir_rate, Defaulted::Given(2000.0));
    let g2 = &gconprod.records[1];
    assert_eq!(g2.procedure, "WELL");
    assert_eq!(g2.reservoir_rate, 300.0);
    let g3 = &gconprod.records[2];
    assert_eq!(g3.control, Defaulted::Default("NONE".to_string()));
    assert!(g3.oil_rate.is_default());
    assert_eq!(g3.water_rate, 500.0);
    assert_eq!(g3.procedure, Defaulted::Default("NONE".to_string()));
    assert_eq!(g3.reservoir_rate, Defaulted::Default(NO_LIMIT));
    assert_eq!(rewrite(&gconprod).unwrap(), gconprod);
}

#[test]
fn gconprod_star_run_reaching_reservoir_rate() {
    let gconprod: Gconprod = parse("'G1' 'RESV' 4* 'NONE' 7* /\n/").unwrap();
    assert!(gconprod.records[0].reservoir_rate.is_default());
    assert_eq!(
        written(&gconprod),
        "GCONPROD\n'G1' 'RESV' 1* 1* 1* 1* 'NONE' 6* 1* /\n/\n"
    );
}

#[test]
fn gconprod_conversion() {
    let mut gconprod: Gconprod = parse("'G1' 'GRAT' 2* 1E5 1* 1* 6* 800 /\n/").unwrap();
    let field = UnitSystem::Field.multipliers();
    gconprod.convert_to_si(&field).unwrap();
    assert!(rel_close(*gconprod.records[0].gas_rate, 1e5 * field.gas_rate()));
    assert!(rel_close(*gconprod.records[0].reservoir_rate, 800.0 * field.reservoir_rate()));
}

#[test]
fn gruptree_parent_defaults_to_field() {
    let gruptree: Gruptree =
        parse("'INJE' 'FIELD' /\n'PROD' 'FIELD' /\n'PLAT' /\n'PROD' 'PLAT' /\n/\n").unwrap();
    assert_eq!(gruptree.records.len(), 4);
    assert_eq!(gruptree.parent_of("PLAT"), Some("FIELD"));
    assert!(gruptree.records[2].parent.is_default());
    assert_eq!(gruptree.parent_of("PROD"), Some("PLAT"));
    assert_eq!(gruptree.parent_of("NONE"), None);
    assert_eq!(rewrite(&gruptree).unwrap(), gruptree);
}
