//! Unit systems of Eclipse decks.
//!
//! A deck declares `METRIC` (the default), `FIELD` or `LAB`. Each system maps
//! to a [`UnitMultipliers`] set: multiplying a deck value by the multiplier of
//! its quantity gives the SI value. [`UnitMultipliers::identity`] is the SI
//! set itself.

pub mod constants;
mod multipliers;

pub use multipliers::{UnitMultipliers, UnitSystem};
