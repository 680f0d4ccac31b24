//! Polymer flooding: WPOLYMER, PLYVISC, PLYADS, PLYROCK, PLYMAX, TLMIXPAR.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::{read_records, read_rows};
use crate::table::{read_fixed_width_table, RegionTable};
use crate::{DeckReader, DeckWriter, Defaulted, SpecialKeyword};

// === WPOLYMER ===

#[derive(Clone, Debug, PartialEq)]
pub struct WpolymerRecord {
    pub well: String,
    pub polymer_concentration: f64,
    pub salt_concentration: f64,
    pub polymer_group: Defaulted<String>,
    pub salt_group: Defaulted<String>,
}

/// Polymer and salt concentrations of injected water.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wpolymer {
    pub records: Vec<WpolymerRecord>,
}

impl SpecialKeyword for Wpolymer {
    const NAME: &'static str = "WPOLYMER";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            Ok(WpolymerRecord {
                well,
                polymer_concentration: record.required_number("polymer concentration")?,
                salt_concentration: record.required_number("salt concentration")?,
                polymer_group: record.string("")?,
                salt_group: record.string("")?,
            })
        })?;
        Ok(Wpolymer { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.well)
                .field(&r.polymer_concentration)
                .field(&r.salt_concentration)
                .field(&r.polymer_group)
                .field(&r.salt_group);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.polymer_concentration *= units.polymer_density;
            r.salt_concentration *= units.polymer_density;
        }
        Ok(())
    }
}

// === PLYVISC / PLYADS ===

/// Water viscosity multiplier against polymer concentration.
#[derive(Clone, Debug, PartialEq)]
pub struct Plyvisc {
    pub table: RegionTable,
}

/// Adsorbed polymer against polymer concentration.
#[derive(Clone, Debug, PartialEq)]
pub struct Plyads {
    pub table: RegionTable,
}

macro_rules! concentration_table {
    ($name:ident, $keyword:literal) => {
        impl SpecialKeyword for $name {
            const NAME: &'static str = $keyword;

            fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
                Ok($name {
                    table: read_fixed_width_table(reader, 2)?,
                })
            }

            fn write(&self, out: &mut DeckWriter) {
                out.keyword(Self::NAME);
                out.region_table(&self.table);
            }

            fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
                self.table.scale_column(0, units.polymer_density);
                Ok(())
            }
        }
    };
}

concentration_table!(Plyvisc, "PLYVISC");
concentration_table!(Plyads, "PLYADS");

// === PLYROCK ===

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlyrockRecord {
    pub dead_pore_volume: Defaulted<f64>,
    pub residual_resistance: Defaulted<f64>,
    pub rock_density: Defaulted<f64>,
    /// `1` desorption allowed, `2` no desorption.
    pub adsorption_index: Defaulted<f64>,
    pub max_adsorption: Defaulted<f64>,
}

/// Polymer-rock interaction per saturation region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plyrock {
    pub records: Vec<PlyrockRecord>,
}

impl SpecialKeyword for Plyrock {
    const NAME: &'static str = "PLYROCK";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            let mut values = [Defaulted::Default(-1.0); 5];
            values[3] = Defaulted::Default(1.0);
            record.numbers(&mut values)?;
            let [dead_pore, resistance, rock_density, adsorption_index, max_adsorption] = values;
            Ok(PlyrockRecord {
                dead_pore_volume: dead_pore,
                residual_resistance: resistance,
                rock_density,
                adsorption_index,
                max_adsorption,
            })
        })?;
        Ok(Plyrock { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.dead_pore_volume)
                .field(&r.residual_resistance)
                .field(&r.rock_density)
                .field(&r.adsorption_index)
                .field(&r.max_adsorption);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.rock_density.scale(units.polymer_density);
        }
        Ok(())
    }
}

// === PLYMAX ===

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlymaxRecord {
    pub polymer_concentration: f64,
    pub salt_concentration: f64,
}

/// Concentrations at which maximum mixing applies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plymax {
    pub records: Vec<PlymaxRecord>,
}

impl SpecialKeyword for Plymax {
    const NAME: &'static str = "PLYMAX";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            Ok(PlymaxRecord {
                polymer_concentration: record.required_number("polymer concentration")?,
                salt_concentration: record.required_number("salt concentration")?,
            })
        })?;
        Ok(Plymax { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.polymer_concentration)
                .field(&r.salt_concentration);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.polymer_concentration *= units.polymer_density;
            r.salt_concentration *= units.polymer_density;
        }
        Ok(())
    }
}

// === TLMIXPAR ===

/// Todd-Longstaff mixing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TlmixparRecord {
    pub viscosity: f64,
    /// Same as `viscosity` unless given.
    pub density: Defaulted<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tlmixpar {
    pub records: Vec<TlmixparRecord>,
}

impl SpecialKeyword for Tlmixpar {
    const NAME: &'static str = "TLMIXPAR";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            let viscosity = record.required_number("viscosity mixing parameter")?;
            let mut density = record.number(-1.0)?;
            if *density < 0.0 {
                *density.value_mut() = viscosity;
            }
            Ok(TlmixparRecord { viscosity, density })
        })?;
        Ok(Tlmixpar { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.viscosity).field(&r.density);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}
