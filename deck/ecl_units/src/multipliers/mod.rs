//! Per-system multiplier sets.

use std::fmt;

use crate::constants::{
    cubic, ATM, BARSA, CENTI, CENTIPOISE, DAY, FEET, GRAM, HOUR, KILO, METER, MILLIDARCY, POUND,
    PSIA, STB,
};

/// Unit system declared by a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Metric,
    Field,
    Lab,
    /// Values already in SI. Never declared by a deck.
    Si,
}

impl UnitSystem {
    /// The system selected by a deck keyword, if `name` is one.
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "METRIC" => Some(UnitSystem::Metric),
            "FIELD" => Some(UnitSystem::Field),
            "LAB" => Some(UnitSystem::Lab),
            _ => None,
        }
    }

    /// The deck keyword declaring this system. `None` for SI.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            UnitSystem::Metric => Some("METRIC"),
            UnitSystem::Field => Some("FIELD"),
            UnitSystem::Lab => Some("LAB"),
            UnitSystem::Si => None,
        }
    }

    pub fn multipliers(self) -> UnitMultipliers {
        UnitMultipliers::for_system(self)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("SI"))
    }
}

/// Deck-unit to SI factor for every physical quantity a keyword can hold.
///
/// Volumes are split by phase and by condition: `*_s` at surface (stock
/// tank) conditions, `*_r` at reservoir conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitMultipliers {
    pub length: f64,
    pub time: f64,
    pub density: f64,
    pub polymer_density: f64,
    pub pressure: f64,
    pub compressibility: f64,
    pub viscosity: f64,
    pub permeability: f64,
    pub liqvol_s: f64,
    pub liqvol_r: f64,
    pub gasvol_s: f64,
    pub gasvol_r: f64,
    pub transmissibility: f64,
}

impl UnitMultipliers {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self::metric(),
            UnitSystem::Field => Self::field(),
            UnitSystem::Lab => Self::lab(),
            UnitSystem::Si => Self::identity(),
        }
    }

    /// All factors 1.
    pub fn identity() -> Self {
        UnitMultipliers {
            length: 1.0,
            time: 1.0,
            density: 1.0,
            polymer_density: 1.0,
            pressure: 1.0,
            compressibility: 1.0,
            viscosity: 1.0,
            permeability: 1.0,
            liqvol_s: 1.0,
            liqvol_r: 1.0,
            gasvol_s: 1.0,
            gasvol_r: 1.0,
            transmissibility: 1.0,
        }
    }

    fn metric() -> Self {
        UnitMultipliers {
            length: METER,
            time: DAY,
            density: 1.0,
            polymer_density: 1.0,
            pressure: BARSA,
            compressibility: 1.0 / BARSA,
            viscosity: CENTIPOISE,
            permeability: MILLIDARCY,
            liqvol_s: 1.0,
            liqvol_r: 1.0,
            gasvol_s: 1.0,
            gasvol_r: 1.0,
            transmissibility: CENTIPOISE * cubic(METER) / (DAY * BARSA),
        }
    }

    fn field() -> Self {
        UnitMultipliers {
            length: FEET,
            time: DAY,
            density: POUND / cubic(FEET),
            polymer_density: POUND / STB,
            pressure: PSIA,
            compressibility: 1.0 / PSIA,
            viscosity: CENTIPOISE,
            permeability: MILLIDARCY,
            liqvol_s: STB,
            liqvol_r: STB,
            gasvol_s: KILO * cubic(FEET),
            gasvol_r: STB,
            transmissibility: CENTIPOISE * STB / (DAY * PSIA),
        }
    }

    fn lab() -> Self {
        let cc = cubic(CENTI * METER);
        UnitMultipliers {
            length: CENTI * METER,
            time: HOUR,
            density: GRAM / cc,
            polymer_density: GRAM / cc,
            pressure: ATM,
            compressibility: 1.0 / ATM,
            viscosity: CENTIPOISE,
            permeability: MILLIDARCY,
            liqvol_s: cc,
            liqvol_r: cc,
            gasvol_s: cc,
            gasvol_r: cc,
            transmissibility: CENTIPOISE * cc / (HOUR * ATM),
        }
    }

    /// The SI-to-deck set: every factor replaced by its reciprocal.
    ///
    /// Every conversion is a product of powers of these factors, so
    /// converting with `m` and then with `m.inverse()` restores the deck
    /// values.
    #[must_use]
    pub fn inverse(&self) -> Self {
        UnitMultipliers {
            length: 1.0 / self.length,
            time: 1.0 / self.time,
            density: 1.0 / self.density,
            polymer_density: 1.0 / self.polymer_density,
            pressure: 1.0 / self.pressure,
            compressibility: 1.0 / self.compressibility,
            viscosity: 1.0 / self.viscosity,
            permeability: 1.0 / self.permeability,
            liqvol_s: 1.0 / self.liqvol_s,
            liqvol_r: 1.0 / self.liqvol_r,
            gasvol_s: 1.0 / self.gasvol_s,
            gasvol_r: 1.0 / self.gasvol_r,
            transmissibility: 1.0 / self.transmissibility,
        }
    }

    // --- Derived quantities ---

    /// Liquid surface volume per time.
    pub fn liquid_rate(&self) -> f64 {
        self.liqvol_s / self.time
    }

    /// Gas surface volume per time.
    pub fn gas_rate(&self) -> f64 {
        self.gasvol_s / self.time
    }

    /// Reservoir volume per time.
    pub fn reservoir_rate(&self) -> f64 {
        self.liqvol_r / self.time
    }

    /// Surface rate of an injector of the given type (`"GAS"` or a liquid).
    pub fn injection_rate(&self, injector_type: &str) -> f64 {
        if injector_type == "GAS" {
            self.gas_rate()
        } else {
            self.liquid_rate()
        }
    }
}

impl Default for UnitMultipliers {
    fn default() -> Self {
        Self::for_system(UnitSystem::default())
    }
}
