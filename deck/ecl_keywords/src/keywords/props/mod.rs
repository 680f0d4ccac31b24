//! Fluid and rock properties: DENSITY, PVTW, PVCDO, ROCK, the dry-gas and
//! dead-oil tables PVDG/PVDO, ROCKTAB, and the live tables PVTO/PVTG.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::read_rows;
use crate::table::{read_fixed_width_table, read_variable_length_table, PvtTable, RegionTable};
use crate::{DeckReader, DeckWriter, Defaulted, SpecialKeyword};

/// Value of a defaulted DENSITY entry.
pub const DENSITY_UNSET: f64 = -1.0e100;

// === DENSITY ===

/// Surface densities of one PVT region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityRecord {
    pub oil: Defaulted<f64>,
    pub water: Defaulted<f64>,
    pub gas: Defaulted<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Density {
    pub records: Vec<DensityRecord>,
}

impl SpecialKeyword for Density {
    const NAME: &'static str = "DENSITY";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            let mut values = [Defaulted::Default(DENSITY_UNSET); 3];
            record.numbers(&mut values)?;
            let [oil, water, gas] = values;
            Ok(DensityRecord { oil, water, gas })
        })?;
        Ok(Density { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.oil).field(&r.water).field(&r.gas);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.oil.scale(units.density);
            r.water.scale(units.density);
            r.gas.scale(units.density);
        }
        Ok(())
    }
}

// === PVTW / PVCDO ===

/// Reference-pressure properties of water (PVTW) or dead oil (PVCDO).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PvtwRecord {
    pub reference_pressure: f64,
    pub volume_factor: f64,
    pub compressibility: f64,
    pub viscosity: f64,
    /// Pressure derivative of viscosity; `0.0` when the row has 4 values.
    pub viscosibility: f64,
}

impl PvtwRecord {
    fn read_all(reader: &mut DeckReader<'_>) -> Result<Vec<Self>, DeckError> {
        read_rows(reader, |record| {
            let mut values: [Option<f64>; 5] = [None; 5];
            record.numbers(&mut values)?;
            let [Some(pref), Some(volume_factor), Some(compressibility), Some(viscosity), rest] =
                values
            else {
                return Err(record.reader().malformed(
                    "row needs reference pressure, volume factor, compressibility and viscosity",
                ));
            };
            Ok(PvtwRecord {
                reference_pressure: pref,
                volume_factor,
                compressibility,
                viscosity,
                viscosibility: rest.unwrap_or(0.0),
            })
        })
    }

    fn write_all(records: &[Self], out: &mut DeckWriter) {
        for r in records {
            out.fields(&[
                r.reference_pressure,
                r.volume_factor,
                r.compressibility,
                r.viscosity,
                r.viscosibility,
            ]);
            out.end_record();
        }
    }

    fn convert(&mut self, units: &UnitMultipliers) {
        self.reference_pressure *= units.pressure;
        self.volume_factor *= units.liqvol_r / units.liqvol_s;
        self.compressibility *= units.compressibility;
        self.viscosity *= units.viscosity;
        self.viscosibility *= units.compressibility;
    }
}

/// Water PVT properties, one row per PVT region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pvtw {
    pub records: Vec<PvtwRecord>,
}

impl SpecialKeyword for Pvtw {
    const NAME: &'static str = "PVTW";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        Ok(Pvtw {
            records: PvtwRecord::read_all(reader)?,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        PvtwRecord::write_all(&self.records, out);
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.convert(units);
        }
        Ok(())
    }
}

/// Dead oil with constant compressibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pvcdo {
    pub records: Vec<PvtwRecord>,
}

impl SpecialKeyword for Pvcdo {
    const NAME: &'static str = "PVCDO";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        Ok(Pvcdo {
            records: PvtwRecord::read_all(reader)?,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        PvtwRecord::write_all(&self.records, out);
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.convert(units);
        }
        Ok(())
    }
}

// === ROCK ===

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RockRecord {
    pub reference_pressure: f64,
    pub compressibility: f64,
}

/// Rock compressibility per region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rock {
    pub records: Vec<RockRecord>,
}

impl SpecialKeyword for Rock {
    const NAME: &'static str = "ROCK";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            Ok(RockRecord {
                reference_pressure: record.required_number("reference pressure")?,
                compressibility: record.required_number("rock compressibility")?,
            })
        })?;
        Ok(Rock { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.reference_pressure).field(&r.compressibility);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.reference_pressure *= units.pressure;
            r.compressibility *= units.compressibility;
        }
        Ok(())
    }
}

// === Three-column tables ===

macro_rules! three_column_table {
    ($(#[$doc:meta])* $name:ident, $keyword:literal, |$table:ident, $units:ident| $convert:block) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub table: RegionTable,
        }

        impl SpecialKeyword for $name {
            const NAME: &'static str = $keyword;

            fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
                Ok($name {
                    table: read_fixed_width_table(reader, 3)?,
                })
            }

            fn write(&self, out: &mut DeckWriter) {
                out.keyword(Self::NAME);
                out.region_table(&self.table);
            }

            fn convert_to_si(&mut self, $units: &UnitMultipliers) -> Result<(), DeckError> {
                let $table = &mut self.table;
                $convert
                Ok(())
            }
        }
    };
}

three_column_table!(
    /// Dry gas: pressure, gas formation volume factor, viscosity.
    Pvdg, "PVDG", |table, units| {
        table.scale_column(0, units.pressure);
        table.scale_column(1, units.gasvol_r / units.gasvol_s);
        table.scale_column(2, units.viscosity);
    }
);

three_column_table!(
    /// Dead oil: pressure, oil formation volume factor, viscosity.
    Pvdo, "PVDO", |table, units| {
        table.scale_column(0, units.pressure);
        table.scale_column(1, units.liqvol_r / units.liqvol_s);
        table.scale_column(2, units.viscosity);
    }
);

three_column_table!(
    /// Pressure, pore volume multiplier, transmissibility multiplier.
    Rocktab, "ROCKTAB", |table, units| {
        table.scale_column(0, units.pressure);
    }
);

// === PVTO / PVTG ===

/// Live oil. Each row is `Rs` followed by `(p, Bo, mu)` triples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pvto {
    pub table: PvtTable,
}

impl SpecialKeyword for Pvto {
    const NAME: &'static str = "PVTO";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        Ok(Pvto {
            table: read_variable_length_table(reader)?,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.pvt_table(&self.table);
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let factors = [
            units.pressure,
            units.liqvol_r / units.liqvol_s,
            units.viscosity,
        ];
        for row in self.table.rows_mut() {
            let (rs, triples) = row.split_at_mut(1);
            rs[0] *= units.gasvol_s / units.liqvol_s;
            scale_triples(triples, factors);
        }
        Ok(())
    }
}

/// Wet gas. Each row is `p` followed by `(Rv, Bg, mu)` triples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pvtg {
    pub table: PvtTable,
}

impl SpecialKeyword for Pvtg {
    const NAME: &'static str = "PVTG";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        Ok(Pvtg {
            table: read_variable_length_table(reader)?,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.pvt_table(&self.table);
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let factors = [
            units.liqvol_s / units.gasvol_s,
            units.gasvol_r / units.gasvol_s,
            units.viscosity,
        ];
        for row in self.table.rows_mut() {
            let (p, triples) = row.split_at_mut(1);
            p[0] *= units.pressure;
            scale_triples(triples, factors);
        }
        Ok(())
    }
}

fn scale_triples(values: &mut [f64], factors: [f64; 3]) {
    for triple in values.chunks_mut(3) {
        for (v, f) in triple.iter_mut().zip(factors) {
            *v *= f;
        }
    }
}

#[cfg(test)]
mod tests;
