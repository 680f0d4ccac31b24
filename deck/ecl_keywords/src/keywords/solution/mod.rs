//! EQUIL: hydrostatic equilibration per region.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::{as_index, read_rows};
use crate::{DeckReader, DeckWriter, Defaulted, SpecialKeyword};

/// Datum and contact depths with the pressures at them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilRecord {
    pub datum_depth: Defaulted<f64>,
    pub datum_pressure: Defaulted<f64>,
    pub water_oil_contact: Defaulted<f64>,
    pub water_oil_capillary_pressure: Defaulted<f64>,
    pub gas_oil_contact: Defaulted<f64>,
    pub gas_oil_capillary_pressure: Defaulted<f64>,
    pub live_oil_init: Defaulted<i32>,
    pub wet_gas_init: Defaulted<i32>,
    pub accuracy: Defaulted<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equil {
    pub records: Vec<EquilRecord>,
}

impl SpecialKeyword for Equil {
    const NAME: &'static str = "EQUIL";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_rows(reader, |record| {
            // Integer items are written as reals often enough to read the
            // whole row in one run.
            let mut values = [Defaulted::Default(0.0); 9];
            record.numbers(&mut values)?;
            let [depth, pressure, woc, woc_pc, goc, goc_pc, live, wet, accuracy] = values;
            let int = |v: Defaulted<f64>| v.map(as_index);
            Ok(EquilRecord {
                datum_depth: depth,
                datum_pressure: pressure,
                water_oil_contact: woc,
                water_oil_capillary_pressure: woc_pc,
                gas_oil_contact: goc,
                gas_oil_capillary_pressure: goc_pc,
                live_oil_init: int(live),
                wet_gas_init: int(wet),
                accuracy: int(accuracy),
            })
        })?;
        Ok(Equil { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.datum_depth)
                .field(&r.datum_pressure)
                .field(&r.water_oil_contact)
                .field(&r.water_oil_capillary_pressure)
                .field(&r.gas_oil_contact)
                .field(&r.gas_oil_capillary_pressure)
                .field(&r.live_oil_init)
                .field(&r.wet_gas_init)
                .field(&r.accuracy);
            out.end_record();
        }
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.datum_depth.scale(units.length);
            r.datum_pressure.scale(units.pressure);
            r.water_oil_contact.scale(units.length);
            r.water_oil_capillary_pressure.scale(units.pressure);
            r.gas_oil_contact.scale(units.length);
            r.gas_oil_capillary_pressure.scale(units.pressure);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
