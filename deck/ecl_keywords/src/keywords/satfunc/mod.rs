//! Saturation functions and end-point scaling: SWOF, SGOF, ENDSCALE,
//! SCALECRS, ENPTVD, ENKRVD.

use ecl_diagnostic::DeckError;
use ecl_lexer_core::Lookahead;
use ecl_units::UnitMultipliers;
use tracing::trace;

use crate::table::{fill_defaults, read_fixed_width_table, RegionTable};
use crate::writer::DeckField;
use crate::{DeckReader, DeckWriter, Defaulted, RecordReader, SpecialKeyword};

// === SWOF / SGOF ===

/// Water-oil saturation functions: Sw, krw, krow, Pcow.
#[derive(Clone, Debug, PartialEq)]
pub struct Swof {
    pub table: RegionTable,
}

impl Swof {
    /// Connate water saturation of region `r`: the first Sw entry.
    pub fn connate_water(&self, r: usize) -> Option<f64> {
        self.table.column(r, 0).first().copied()
    }
}

/// Gas-oil saturation functions: Sg, krg, krog, Pcog.
#[derive(Clone, Debug, PartialEq)]
pub struct Sgof {
    pub table: RegionTable,
}

impl Sgof {
    /// Maximum gas saturation of region `r`: the last Sg entry.
    pub fn max_gas(&self, r: usize) -> Option<f64> {
        self.table.column(r, 0).last().copied()
    }
}

macro_rules! saturation_table {
    ($name:ident, $keyword:literal) => {
        impl SpecialKeyword for $name {
            const NAME: &'static str = $keyword;

            fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
                Ok($name {
                    table: read_fixed_width_table(reader, 4)?,
                })
            }

            fn write(&self, out: &mut DeckWriter) {
                out.keyword(Self::NAME);
                out.region_table(&self.table);
            }

            fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
                self.table.scale_column(3, units.pressure);
                Ok(())
            }
        }
    };
}

saturation_table!(Swof, "SWOF");
saturation_table!(Sgof, "SGOF");

// === ENDSCALE ===

/// End-point scaling options.
#[derive(Clone, Debug, PartialEq)]
pub struct Endscale {
    pub direction: Defaulted<String>,
    pub reversibility: Defaulted<String>,
    pub num_tables: Defaulted<i32>,
    pub num_nodes: Defaulted<i32>,
}

impl SpecialKeyword for Endscale {
    const NAME: &'static str = "ENDSCALE";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let mut record = RecordReader::new(reader);
        let direction = record.string("NODIR")?;
        let reversibility = record.string("REVERS")?;
        let num_tables = record.number(1)?;
        let num_nodes = record.number(20)?;
        record.finish()?;
        Ok(Endscale {
            direction,
            reversibility,
            num_tables,
            num_nodes,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.field(&self.direction)
            .field(&self.reversibility)
            .field(&self.num_tables)
            .field(&self.num_nodes);
        out.end_record();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === SCALECRS ===

/// Whether critical saturations take part in end-point scaling.
#[derive(Clone, Debug, PartialEq)]
pub struct Scalecrs {
    /// `YES` or `NO`.
    pub value: Defaulted<String>,
}

impl Scalecrs {
    pub fn is_enabled(&self) -> bool {
        self.value.as_str() == "YES"
    }
}

impl SpecialKeyword for Scalecrs {
    const NAME: &'static str = "SCALECRS";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let mut record = RecordReader::new(reader);
        let value = record.string("NO")?.map(|answer| {
            if answer.starts_with(['Y', 'y']) {
                "YES".to_string()
            } else {
                "NO".to_string()
            }
        });
        record.finish()?;
        Ok(Scalecrs { value })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.field(&self.value);
        out.end_record();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === ENPTVD / ENKRVD ===

/// Value of an end point that is not scaled.
pub const ENDPOINT_UNSET: f64 = -1.0;

/// End points against depth.
///
/// Column 0 is depth; the other columns are the supported end points.
/// Defaulted entries are interpolated in depth, and a column defaulted in
/// every row stays at [`ENDPOINT_UNSET`].
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointDepthTable {
    pub table: RegionTable,
    /// Per end-point column: set in the first row of some region.
    pub mask: [bool; 4],
}

/// Deck layout of a depth table: row width and which deck columns are kept.
struct DepthLayout {
    width: usize,
    kept: [usize; 5],
}

impl DepthLayout {
    fn is_kept(&self, c: usize) -> bool {
        self.kept.contains(&c)
    }
}

const ENPTVD_LAYOUT: DepthLayout = DepthLayout {
    width: 9,
    kept: [0, 1, 2, 3, 7],
};

const ENKRVD_LAYOUT: DepthLayout = DepthLayout {
    width: 8,
    kept: [0, 1, 3, 4, 7],
};

impl EndpointDepthTable {
    fn read(reader: &mut DeckReader<'_>, layout: &DepthLayout) -> Result<Self, DeckError> {
        let mut regions = Vec::new();
        let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
        loop {
            match reader.classify_next()? {
                Lookahead::Data => {}
                Lookahead::Terminator => {
                    // A `/` right after a closed region ends the keyword.
                    reader.consume_terminator();
                    break;
                }
                Lookahead::Keyword | Lookahead::EndOfInput => break,
                Lookahead::Quoted | Lookahead::Other(_) => {
                    return Err(reader.malformed("expected numeric table row"));
                }
            }
            rows.push(Self::read_row(reader, layout)?);
            if reader.consume_terminator() {
                regions.push(Self::close_region(reader, layout, &rows)?);
                rows.clear();
            }
        }
        if !rows.is_empty() {
            regions.push(Self::close_region(reader, layout, &rows)?);
        }
        if regions.is_empty() {
            return Err(reader.malformed("table has no rows"));
        }
        let table = RegionTable::from_regions(layout.kept.len(), regions)
            .ok_or_else(|| reader.malformed("inconsistent region shapes"))?;
        let mut mask = [false; 4];
        for (c, set) in mask.iter_mut().enumerate() {
            *set = (0..table.num_regions())
                .any(|r| table.column(r, c + 1).first() != Some(&ENDPOINT_UNSET));
        }
        trace!(regions = table.num_regions(), ?mask, "read end-point depth table");
        Ok(EndpointDepthTable { table, mask })
    }

    fn read_row(
        reader: &mut DeckReader<'_>,
        layout: &DepthLayout,
    ) -> Result<Vec<Option<f64>>, DeckError> {
        let mut row = vec![None; layout.width];
        let mut record = RecordReader::new(reader);
        let visited = record.numbers(&mut row)?;
        if visited < layout.width {
            return Err(record.reader().malformed(format!(
                "row has {visited} values, expected {}",
                layout.width
            )));
        }
        if row[0].is_none() {
            return Err(record.reader().malformed("depth may not be defaulted"));
        }
        if let Some(c) = (0..layout.width).find(|&c| !layout.is_kept(c) && row[c].is_some()) {
            return Err(record
                .reader()
                .malformed(format!("column {} is not supported and must be defaulted", c + 1)));
        }
        Ok(row)
    }

    fn close_region(
        reader: &DeckReader<'_>,
        layout: &DepthLayout,
        rows: &[Vec<Option<f64>>],
    ) -> Result<Vec<Vec<f64>>, DeckError> {
        if rows.len() < 2 {
            return Err(reader.malformed("each region needs at least two rows"));
        }
        let mut columns = Vec::with_capacity(layout.kept.len());
        for &c in &layout.kept {
            if c > 0 && rows.iter().all(|row| row[c].is_none()) {
                columns.push(vec![ENDPOINT_UNSET; rows.len()]);
                continue;
            }
            let pair: Vec<Vec<Option<f64>>> = rows.iter().map(|row| vec![row[0], row[c]]).collect();
            let mut filled = fill_defaults(reader, &pair)?;
            columns.push(filled.pop().unwrap_or_default());
        }
        Ok(columns)
    }

    fn write(&self, out: &mut DeckWriter, layout: &DepthLayout) {
        for r in 0..self.table.num_regions() {
            for i in 0..self.table.row_count(r) {
                let mut kept = self.table.row(r, i);
                for c in 0..layout.width {
                    let value = if layout.is_kept(c) { kept.next() } else { None };
                    match value {
                        Some(v) => v.write_field(out),
                        None => out.token("1*"),
                    }
                }
                out.newline();
            }
            out.end_list();
        }
    }
}

/// Saturation end points against depth.
///
/// Kept columns: depth, SWL, SWCR, SWU, SOWCR.
#[derive(Clone, Debug, PartialEq)]
pub struct Enptvd {
    pub endpoints: EndpointDepthTable,
}

/// Relative permeability end points against depth.
///
/// Kept columns: depth, KRW, KRO, KRWR, KRORG.
#[derive(Clone, Debug, PartialEq)]
pub struct Enkrvd {
    pub endpoints: EndpointDepthTable,
}

macro_rules! depth_table {
    ($name:ident, $keyword:literal, $layout:ident) => {
        impl SpecialKeyword for $name {
            const NAME: &'static str = $keyword;

            fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
                Ok($name {
                    endpoints: EndpointDepthTable::read(reader, &$layout)?,
                })
            }

            fn write(&self, out: &mut DeckWriter) {
                out.keyword(Self::NAME);
                self.endpoints.write(out, &$layout);
            }

            fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
                self.endpoints.table.scale_column(0, units.length);
                Ok(())
            }
        }
    };
}

depth_table!(Enptvd, "ENPTVD", ENPTVD_LAYOUT);
depth_table!(Enkrvd, "ENKRVD", ENKRVD_LAYOUT);
