#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecl_diagnostic::ErrorCode;
use ecl_units::{UnitMultipliers, UnitSystem};
use pretty_assertions::assert_eq;

use super::*;
use crate::keywords::test_support::{parse, parse_leaving, rel_close, rewrite, written};

#[test]
fn density_rows_stop_at_next_keyword() {
    let density: Density = parse_leaving("900 1000 1\n 850 1020 0.9 /\nPVTW\n", "PVTW\n").unwrap();
    assert_eq!(density.records.len(), 2);
    assert_eq!(density.records[0].oil, 900.0);
    assert_eq!(density.records[1].gas, Defaulted::Given(0.9));
    assert_eq!(rewrite(&density).unwrap(), density);
}

#[test]
fn density_defaults_and_conversion() {
    let mut density: Density = parse("1* 1000 /\n").unwrap();
    assert_eq!(density.records[0].oil, Defaulted::Default(DENSITY_UNSET));
    assert!(density.records[0].gas.is_default());
    assert_eq!(written(&density), "DENSITY\n1* 1000 1* /\n");

    density
        .convert_to_si(&UnitSystem::Field.multipliers())
        .unwrap();
    let lb_per_ft3 = UnitSystem::Field.multipliers().density;
    assert!(rel_close(*density.records[0].water, 1000.0 * lb_per_ft3));
}

#[test]
fn pvtw_scenario() {
    let mut pvtw: Pvtw = parse("300 1.0 1e-5 0.5 0.0\n/\n").unwrap();
    assert_eq!(
        pvtw.records,
        vec![PvtwRecord {
            reference_pressure: 300.0,
            volume_factor: 1.0,
            compressibility: 1e-5,
            viscosity: 0.5,
            viscosibility: 0.0,
        }]
    );
    assert_eq!(rewrite(&pvtw).unwrap(), pvtw);
    let mut units = UnitMultipliers::identity();
    units.viscosity = 1e-3;
    pvtw.convert_to_si(&units).unwrap();
    assert_eq!(pvtw.records[0].reference_pressure, 300.0);
    assert!(rel_close(pvtw.records[0].viscosity, 0.5e-3));
}

#[test]
fn pvcdo_four_values_get_zero_viscosibility() {
    let pvcdo: Pvcdo = parse("250 1.1 1.2D-5 2 /\n270 1.05 1.0E-5 2.5 1E-3 /\n").unwrap();
    assert_eq!(pvcdo.records.len(), 2);
    assert_eq!(pvcdo.records[0].viscosibility, 0.0);
    assert_eq!(pvcdo.records[0].compressibility, 1.2e-5);
    assert_eq!(pvcdo.records[1].viscosibility, 1e-3);
    assert_eq!(rewrite(&pvcdo).unwrap(), pvcdo);
}

#[test]
fn pvtw_defaulted_viscosibility_is_written_as_zero() {
    let pvtw: Pvtw = parse("300 1.0 1e-5 0.5 1* /\n310 1.0 1e-5 0.5 /\n").unwrap();
    assert_eq!(pvtw.records[0].viscosibility, 0.0);
    assert_eq!(written(&pvtw), "PVTW\n300 1 1e-5 0.5 0 /\n310 1 1e-5 0.5 0 /\n");
    assert_eq!(rewrite(&pvtw).unwrap(), pvtw);
}

#[test]
fn pvtw_needs_four_values() {
    let err = parse::<Pvtw>("300 1.0 /\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.keyword.as_deref(), Some("PVTW"));
}

#[test]
fn rock_converts_pressure_and_compressibility() {
    let mut rock: Rock = parse("277 4.8E-5 /\n").unwrap();
    assert_eq!(rewrite(&rock).unwrap(), rock);
    let metric = UnitSystem::Metric.multipliers();
    rock.convert_to_si(&metric).unwrap();
    assert!(rel_close(rock.records[0].reference_pressure, 277.0e5));
    assert!(rel_close(rock.records[0].compressibility, 4.8e-10));
}

#[test]
fn pvdg_regions_and_conversion() {
    let mut pvdg: Pvdg = parse_leaving(
        "-- p  Bg  mu\n 20 0.06 0.012\n 100 0.012 0.018 /\n 30 0.05 0.013 /\nPVDO",
        "PVDO",
    )
    .unwrap();
    assert_eq!(pvdg.table.num_regions(), 2);
    assert_eq!(pvdg.table.column(0, 0), &[20.0, 100.0]);
    assert_eq!(rewrite(&pvdg).unwrap(), pvdg);

    let field = UnitSystem::Field.multipliers();
    pvdg.convert_to_si(&field).unwrap();
    let bg = pvdg.table.column(0, 1)[0];
    assert!(rel_close(bg, 0.06 * field.gasvol_r / field.gasvol_s));
}

#[test]
fn pvdo_defaulted_entries_are_written_interpolated() {
    let pvdo: Pvdo = parse("10 1.25 1.0\n 20 1* 1.5\n 30 1.0 1* /\n").unwrap();
    assert_eq!(pvdo.table.column(0, 1), &[1.25, 1.125, 1.0]);
    assert_eq!(pvdo.table.column(0, 2), &[1.0, 1.5, 1.5]);
    assert_eq!(
        written(&pvdo),
        "PVDO\n10 1.25 1\n20 1.125 1.5\n30 1 1.5\n/\n"
    );
    assert_eq!(rewrite(&pvdo).unwrap(), pvdo);
}

#[test]
fn rocktab_converts_pressure_only() {
    let mut rocktab: Rocktab = parse("100 0.99 1.0\n 200 1.0 1.0 /\n").unwrap();
    assert_eq!(rewrite(&rocktab).unwrap(), rocktab);
    rocktab
        .convert_to_si(&UnitSystem::Metric.multipliers())
        .unwrap();
    assert_eq!(rocktab.table.column(0, 0), &[100.0e5, 200.0e5]);
    assert_eq!(rocktab.table.column(0, 1), &[0.99, 1.0]);
}

#[test]
fn pvto_rows_and_conversion() {
    let body = "\
20 10 1.1 1.2
   50 1.08 1.4 /
40 30 1.2 1.0 /
/
";
    let mut pvto: Pvto = parse(body).unwrap();
    assert_eq!(pvto.table.regions[0][0], vec![20.0, 10.0, 1.1, 1.2, 50.0, 1.08, 1.4]);
    assert_eq!(rewrite(&pvto).unwrap(), pvto);

    let field = UnitSystem::Field.multipliers();
    pvto.convert_to_si(&field).unwrap();
    let row = &pvto.table.regions[0][0];
    assert!(rel_close(row[0], 20.0 * field.gasvol_s / field.liqvol_s));
    assert!(rel_close(row[4], 50.0 * field.pressure));
    assert!(rel_close(row[6], 1.4 * field.viscosity));
}

#[test]
fn pvtg_converts_pressure_first() {
    let mut pvtg: Pvtg = parse("60 0.0001 0.01 0.015\n   0 0.011 0.014 /\n/\n").unwrap();
    assert_eq!(pvtg.table.regions[0][0].len(), 7);
    assert_eq!(rewrite(&pvtg).unwrap(), pvtg);
    let metric = UnitSystem::Metric.multipliers();
    pvtg.convert_to_si(&metric).unwrap();
    let row = &pvtg.table.regions[0][0];
    assert!(rel_close(row[0], 60.0e5));
    assert!(rel_close(row[3], 0.015e-3));
}

#[test]
fn pvtg_rejects_broken_triples() {
    let err = parse::<Pvtg>("60 0.0001 0.01 /\n/\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
}
