//! Multi-region numeric tables.
//!
//! Saturation and dry-gas/dead-oil tables are fixed-width: every row has the
//! same number of columns and each region ends with `/`. Live-oil and wet-gas
//! tables (PVTO, PVTG) have rows of `1 + 3k` values instead.

use ecl_diagnostic::DeckError;
use ecl_lexer_core::Lookahead;
use tracing::{trace, warn};

use crate::vector::{read_defaulted, read_vector};
use crate::DeckReader;

/// Fixed column count; per region, one `Vec` per column.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionTable {
    columns: usize,
    /// `regions[r][c][row]`
    regions: Vec<Vec<Vec<f64>>>,
}

impl RegionTable {
    /// A table from column-major regions. `None` if any region has the wrong
    /// column count or ragged columns.
    pub fn from_regions(columns: usize, regions: Vec<Vec<Vec<f64>>>) -> Option<Self> {
        let well_formed = regions.iter().all(|region| {
            region.len() == columns && region.iter().all(|col| col.len() == region[0].len())
        });
        well_formed.then_some(RegionTable { columns, regions })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[Vec<Vec<f64>>] {
        &self.regions
    }

    /// Column `c` of region `r`.
    pub fn column(&self, r: usize, c: usize) -> &[f64] {
        &self.regions[r][c]
    }

    pub fn row_count(&self, r: usize) -> usize {
        self.regions[r].first().map_or(0, Vec::len)
    }

    /// Row `i` of region `r`.
    pub fn row(&self, r: usize, i: usize) -> impl Iterator<Item = f64> + '_ {
        self.regions[r].iter().map(move |col| col[i])
    }

    /// Multiply column `c` of every region.
    pub fn scale_column(&mut self, c: usize, factor: f64) {
        for region in &mut self.regions {
            for v in &mut region[c] {
                *v *= factor;
            }
        }
    }
}

/// Per region, rows of `1 + 3k` values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PvtTable {
    /// `regions[r][row]`
    pub regions: Vec<Vec<Vec<f64>>>,
}

impl PvtTable {
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Vec<f64>> {
        self.regions.iter_mut().flatten()
    }
}

// === Fixed width ===

/// Read `columns`-wide rows, grouped into regions by `/`.
///
/// A row cut short by `/` is kept and closes its region. The table ends at
/// the next keyword or end of input; a region still open at that point is
/// closed. Defaulted entries are filled by [`fill_defaults`].
pub fn read_fixed_width_table(
    reader: &mut DeckReader<'_>,
    columns: usize,
) -> Result<RegionTable, DeckError> {
    let mut regions = Vec::new();
    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    loop {
        match reader.classify_next()? {
            Lookahead::Data => {}
            Lookahead::Keyword | Lookahead::EndOfInput => {
                if !rows.is_empty() {
                    regions.push(fill_defaults(reader, &rows)?);
                }
                break;
            }
            Lookahead::Terminator => {
                reader.consume_terminator();
                if rows.is_empty() {
                    return Err(reader.malformed("empty table region"));
                }
                regions.push(fill_defaults(reader, &rows)?);
                rows.clear();
                continue;
            }
            Lookahead::Quoted | Lookahead::Other(_) => {
                return Err(reader.malformed("expected numeric table row"));
            }
        }
        let mut row = vec![None; columns];
        let visited = read_defaulted(reader, &mut row)?;
        if visited > 0 {
            rows.push(row);
        }
        if visited < columns {
            regions.push(fill_defaults(reader, &rows)?);
            rows.clear();
        }
    }
    if regions.is_empty() {
        return Err(reader.malformed("table has no rows"));
    }
    trace!(regions = regions.len(), columns, "read region table");
    Ok(RegionTable { columns, regions })
}

/// Turn rows with defaulted entries into full columns.
///
/// A defaulted entry is linearly interpolated against column 0 between the
/// nearest given entries above and below it, or copied from the only one
/// when it lies before the first or after the last.
pub fn fill_defaults(
    reader: &DeckReader<'_>,
    rows: &[Vec<Option<f64>>],
) -> Result<Vec<Vec<f64>>, DeckError> {
    let columns = rows.first().map_or(0, Vec::len);
    let mut xs = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match row[0] {
            Some(x) => xs.push(x),
            None => {
                return Err(reader.malformed(format!("first column defaulted in row {}", i + 1)))
            }
        }
    }
    let mut filled = vec![xs.clone()];
    for c in 1..columns {
        let given: Vec<usize> = (0..rows.len()).filter(|&i| rows[i][c].is_some()).collect();
        let value = |i: usize| rows[i][c].unwrap_or_default();
        let mut column = Vec::with_capacity(rows.len());
        for i in 0..rows.len() {
            if let Some(v) = rows[i][c] {
                column.push(v);
                continue;
            }
            let above = given.iter().rev().find(|&&g| g < i).copied();
            let below = given.iter().find(|&&g| g > i).copied();
            let v = match (above, below) {
                (Some(a), Some(b)) if xs[b] != xs[a] => {
                    let t = (xs[i] - xs[a]) / (xs[b] - xs[a]);
                    value(a) + t * (value(b) - value(a))
                }
                (Some(g), _) | (None, Some(g)) => value(g),
                (None, None) => {
                    return Err(reader.malformed(format!("column {} entirely defaulted", c + 1)))
                }
            };
            column.push(v);
        }
        filled.push(column);
    }
    Ok(filled)
}

// === Variable length ===

/// Read PVTO/PVTG style regions.
///
/// Each row is one `/`-terminated record of `1 + 3k` values; a bare `/`
/// closes the region.
pub fn read_variable_length_table(reader: &mut DeckReader<'_>) -> Result<PvtTable, DeckError> {
    let mut table = PvtTable::default();
    let mut rows = Vec::new();
    loop {
        match reader.classify_next()? {
            Lookahead::Data => {
                let row = read_vector::<f64>(reader)?;
                if row.len() < 4 || (row.len() - 1) % 3 != 0 {
                    return Err(reader.malformed(format!(
                        "row has {} values, expected 1 + 3k",
                        row.len()
                    )));
                }
                rows.push(row);
            }
            Lookahead::Terminator => {
                reader.consume_terminator();
                if rows.is_empty() {
                    return Err(reader.malformed("empty table region"));
                }
                table.regions.push(std::mem::take(&mut rows));
            }
            Lookahead::Keyword | Lookahead::EndOfInput => {
                if !rows.is_empty() {
                    warn!(
                        keyword = reader.keyword().unwrap_or_default(),
                        "table region not closed by `/`"
                    );
                    table.regions.push(rows);
                }
                break;
            }
            Lookahead::Quoted | Lookahead::Other(_) => {
                return Err(reader.malformed("expected numeric table row"));
            }
        }
    }
    if table.regions.is_empty() {
        return Err(reader.malformed("table has no rows"));
    }
    trace!(regions = table.regions.len(), "read variable-length table");
    Ok(table)
}
