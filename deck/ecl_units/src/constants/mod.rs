//! SI values of the units used by the deck unit systems.

// === Prefixes ===

pub const CENTI: f64 = 1.0e-2;
pub const MILLI: f64 = 1.0e-3;
pub const KILO: f64 = 1.0e3;

// === Length ===

pub const METER: f64 = 1.0;
pub const INCH: f64 = 2.54 * CENTI * METER;
pub const FEET: f64 = 12.0 * INCH;

// === Time ===

pub const SECOND: f64 = 1.0;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;

// === Mass ===

pub const KILOGRAM: f64 = 1.0;
pub const GRAM: f64 = 1.0e-3 * KILOGRAM;
pub const POUND: f64 = 0.453_592_37 * KILOGRAM;

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.806_65;

// === Pressure ===

pub const PASCAL: f64 = 1.0;
pub const BARSA: f64 = 100_000.0;
pub const ATM: f64 = 101_325.0;
/// Pound-force per square inch.
pub const PSIA: f64 = POUND * GRAVITY / (INCH * INCH);

// === Viscosity ===

pub const POISE: f64 = 0.1;
pub const CENTIPOISE: f64 = CENTI * POISE;

// === Permeability ===

pub const DARCY: f64 = 9.869_233e-13;
pub const MILLIDARCY: f64 = MILLI * DARCY;

// === Volume ===

/// Stock tank barrel.
pub const STB: f64 = 0.158_987_294_928;

pub const fn cubic(length: f64) -> f64 {
    length * length * length
}
