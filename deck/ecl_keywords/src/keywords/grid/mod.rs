//! Grid-section keywords: SPECGRID, FAULTS, MULTFLT.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::read_records;
use crate::{DeckReader, DeckWriter, Defaulted, RecordReader, SpecialKeyword};

/// Grid dimensions and coordinate type.
#[derive(Clone, Debug, PartialEq)]
pub struct Specgrid {
    pub dimensions: [Defaulted<i32>; 3],
    pub numres: Defaulted<i32>,
    /// `F` Cartesian, `T` radial.
    pub coord: Defaulted<String>,
}

impl Specgrid {
    pub fn dims(&self) -> [i32; 3] {
        self.dimensions.map(|d| *d)
    }

    pub fn is_radial(&self) -> bool {
        self.coord.starts_with('T')
    }
}

impl SpecialKeyword for Specgrid {
    const NAME: &'static str = "SPECGRID";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let mut record = RecordReader::new(reader);
        let mut ints = [Defaulted::Default(1); 4];
        record.numbers(&mut ints)?;
        let coord = record.string("F")?;
        record.finish()?;
        let [nx, ny, nz, numres] = ints;
        Ok(Specgrid {
            dimensions: [nx, ny, nz],
            numres,
            coord,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.fields(&self.dimensions)
            .field(&self.numres)
            .field(&self.coord);
        out.end_record();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === FAULTS ===

/// One fault segment: a box of cells and the face they share.
#[derive(Clone, Debug, PartialEq)]
pub struct FaultSegment {
    pub name: String,
    /// I1 I2 J1 J2 K1 K2
    pub ijk: [i32; 6],
    pub face: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Faults {
    pub segments: Vec<FaultSegment>,
}

impl SpecialKeyword for Faults {
    const NAME: &'static str = "FAULTS";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let segments = read_records(reader, |record, name| {
            let mut ijk: [Option<i32>; 6] = [None; 6];
            record.numbers(&mut ijk)?;
            let [Some(i1), Some(i2), Some(j1), Some(j2), Some(k1), Some(k2)] = ijk else {
                return Err(record
                    .reader()
                    .malformed(format!("fault segment {name} needs all six box indices")));
            };
            let face = record.required_string("fault face")?;
            Ok(FaultSegment {
                name,
                ijk: [i1, i2, j1, j2, k1, k2],
                face,
            })
        })?;
        Ok(Faults { segments })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for segment in &self.segments {
            out.field(&segment.name).fields(&segment.ijk).field(&segment.face);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === MULTFLT ===

#[derive(Clone, Debug, PartialEq)]
pub struct MultfltRecord {
    pub fault: String,
    pub transmissibility: Defaulted<f64>,
    pub diffusivity: Defaulted<f64>,
}

/// Transmissibility multipliers per fault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Multflt {
    pub records: Vec<MultfltRecord>,
}

impl SpecialKeyword for Multflt {
    const NAME: &'static str = "MULTFLT";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, fault| {
            let mut mults = [Defaulted::Default(1.0); 2];
            record.numbers(&mut mults)?;
            let [transmissibility, diffusivity] = mults;
            Ok(MultfltRecord {
                fault,
                transmissibility,
                diffusivity,
            })
        })?;
        Ok(Multflt { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for r in &self.records {
            out.field(&r.fault)
                .field(&r.transmissibility)
                .field(&r.diffusivity);
            out.end_record();
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}
