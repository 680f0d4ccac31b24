//! Group controls and the group hierarchy: GCONINJE, GCONPROD, GRUPTREE.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::{read_records, NO_LIMIT};
use crate::{DeckReader, DeckWriter, Defaulted, SpecialKeyword};

// === GCONINJE ===

#[derive(Clone, Debug, PartialEq)]
pub struct GconinjeRecord {
    pub group: String,
    pub injector_type: String,
    pub control: String,
    pub surface_rate: Defaulted<f64>,
    pub reservoir_rate: Defaulted<f64>,
    pub reinjection_fraction: Defaulted<f64>,
    pub voidage_fraction: Defaulted<f64>,
}

/// Group injection controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gconinje {
    pub records: Vec<GconinjeRecord>,
}

impl SpecialKeyword for Gconinje {
    const NAME: &'static str = "GCONINJE";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, group| {
            let injector_type = record.required_string("injector type")?;
            let control = record.required_string("control mode")?;
            let mut values = [Defaulted::Default(NO_LIMIT); 4];
            record.numbers(&mut values)?;
            let [surface_rate, reservoir_rate, reinjection_fraction, voidage_fraction] = values;
            Ok(GconinjeRecord {
                group,
                injector_type,
                control,
                surface_rate,
                reservoir_rate,
                reinjection_fraction,
                voidage_fraction,
            })
        })?;
        Ok(Gconinje { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.group)
                .field(&r.injector_type)
                .field(&r.control)
                .field(&r.surface_rate)
                .field(&r.reservoir_rate)
                .field(&r.reinjection_fraction)
                .field(&r.voidage_fraction);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.surface_rate
                .scale(units.injection_rate(&r.injector_type));
            r.reservoir_rate.scale(units.reservoir_rate());
        }
        Ok(())
    }
}

// === GCONPROD ===

/// Items between the procedure and the reservoir rate that are not kept.
const GCONPROD_SKIPPED: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct GconprodRecord {
    pub group: String,
    /// `NONE` when defaulted.
    pub control: Defaulted<String>,
    pub oil_rate: Defaulted<f64>,
    pub water_rate: Defaulted<f64>,
    pub gas_rate: Defaulted<f64>,
    pub liquid_rate: Defaulted<f64>,
    /// Action when a rate limit is exceeded.
    pub procedure: Defaulted<String>,
    pub reservoir_rate: Defaulted<f64>,
}

/// Group production controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gconprod {
    pub records: Vec<GconprodRecord>,
}

impl SpecialKeyword for Gconprod {
    const NAME: &'static str = "GCONPROD";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, group| {
            let control = record.string("NONE")?;
            let mut rates = [Defaulted::Default(NO_LIMIT); 4];
            record.numbers(&mut rates)?;
            let [oil_rate, water_rate, gas_rate, liquid_rate] = rates;
            let procedure = record.string("NONE")?;
            record.skip(GCONPROD_SKIPPED)?;
            // Defaults when the skip already reached the `/`.
            let reservoir_rate = record.number(NO_LIMIT)?;
            Ok(GconprodRecord {
                group,
                control,
                oil_rate,
                water_rate,
                gas_rate,
                liquid_rate,
                procedure,
                reservoir_rate,
            })
        })?;
        Ok(Gconprod { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.group)
                .field(&r.control)
                .field(&r.oil_rate)
                .field(&r.water_rate)
                .field(&r.gas_rate)
                .field(&r.liquid_rate)
                .field(&r.procedure);
            out.token(&format!("{GCONPROD_SKIPPED}*"));
            out.field(&r.reservoir_rate);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let lrat = units.liquid_rate();
        for r in &mut self.records {
            r.oil_rate.scale(lrat);
            r.water_rate.scale(lrat);
            r.gas_rate.scale(units.gas_rate());
            r.liquid_rate.scale(lrat);
            r.reservoir_rate.scale(units.reservoir_rate());
        }
        Ok(())
    }
}

// === GRUPTREE ===

#[derive(Clone, Debug, PartialEq)]
pub struct GruptreeRecord {
    pub child: String,
    pub parent: Defaulted<String>,
}

/// Group hierarchy as child-parent pairs, in deck order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gruptree {
    pub records: Vec<GruptreeRecord>,
}

impl Gruptree {
    /// Parent of `group`, as set by its last record.
    pub fn parent_of(&self, group: &str) -> Option<&str> {
        self.records
            .iter()
            .rev()
            .find(|r| r.child == group)
            .map(|r| r.parent.as_str())
    }
}

impl SpecialKeyword for Gruptree {
    const NAME: &'static str = "GRUPTREE";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, child| {
            Ok(GruptreeRecord {
                child,
                parent: record.string("FIELD")?,
            })
        })?;
        Ok(Gruptree { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.child).field(&r.parent);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
