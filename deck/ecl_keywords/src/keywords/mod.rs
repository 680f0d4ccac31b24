//! Keyword grammars, grouped by deck section.
//!
//! Two record layouts cover most keywords:
//! - named records (`'W1' ... /`), one per line, closed by a bare `/`:
//!   [`read_records`]
//! - numeric rows, one per region, ended by the next keyword: [`read_rows`]

mod grid;
mod groups;
mod ignored;
mod polymer;
mod props;
mod satfunc;
mod schedule;
mod solution;
#[cfg(test)]
mod test_support;
mod wells;

pub use grid::{FaultSegment, Faults, Multflt, MultfltRecord, Specgrid};
pub use groups::{Gconinje, GconinjeRecord, Gconprod, GconprodRecord, Gruptree, GruptreeRecord};
pub use ignored::Ignored;
pub use polymer::{
    Plyads, Plymax, PlymaxRecord, Plyrock, PlyrockRecord, Plyvisc, Tlmixpar, TlmixparRecord,
    Wpolymer, WpolymerRecord,
};
pub use props::{
    Density, DensityRecord, Pvcdo, Pvdg, Pvdo, Pvtg, Pvto, Pvtw, PvtwRecord, Rock, RockRecord,
    Rocktab, DENSITY_UNSET,
};
pub use satfunc::{
    Endscale, EndpointDepthTable, Enkrvd, Enptvd, Scalecrs, Sgof, Swof, ENDPOINT_UNSET,
};
pub use schedule::{Dates, Start, Title, Tstep};
pub use solution::{Equil, EquilRecord};
pub use wells::{
    Compdat, CompdatRecord, Wconinje, WconinjeRecord, Wconprod, WconprodRecord, Welopen,
    WelopenRecord, Welspecs, WelspecsRecord, Weltarg, WeltargRecord, Wgrupcon, WgrupconRecord,
};

use ecl_diagnostic::DeckError;
use ecl_lexer_core::Lookahead;
use tracing::trace;

use crate::{DeckReader, RecordReader};

/// "No limit" default of rate and pressure controls.
pub const NO_LIMIT: f64 = -1.0e20;

/// Named records until a bare `/`.
///
/// `read_one` gets the record's leading name and reads the remaining
/// fields; the record's `/` is consumed afterwards unless a field read
/// already hit it.
pub fn read_records<'a, T>(
    reader: &mut DeckReader<'a>,
    mut read_one: impl FnMut(&mut RecordReader<'_, 'a>, String) -> Result<T, DeckError>,
) -> Result<Vec<T>, DeckError> {
    let mut records = Vec::new();
    loop {
        let token = reader.next_token()?;
        if token.is_terminator() {
            reader.skip_rest_of_line();
            break;
        }
        let name = token.text.to_string();
        let mut record = RecordReader::new(reader);
        let value = read_one(&mut record, name)?;
        record.finish()?;
        records.push(value);
    }
    trace!(records = records.len(), "read named records");
    Ok(records)
}

/// Numeric rows until the next keyword or end of input.
///
/// A row's trailing `/` is optional.
pub fn read_rows<'a, T>(
    reader: &mut DeckReader<'a>,
    mut read_one: impl FnMut(&mut RecordReader<'_, 'a>) -> Result<T, DeckError>,
) -> Result<Vec<T>, DeckError> {
    let mut rows = Vec::new();
    loop {
        match reader.classify_next()? {
            Lookahead::Data => {}
            Lookahead::Keyword | Lookahead::EndOfInput => break,
            Lookahead::Terminator => return Err(reader.malformed("empty record")),
            Lookahead::Quoted | Lookahead::Other(_) => {
                return Err(reader.malformed("expected a numeric row"));
            }
        }
        let mut record = RecordReader::new(reader);
        rows.push(read_one(&mut record)?);
        record.finish_row();
    }
    if rows.is_empty() {
        return Err(reader.malformed("keyword has no rows"));
    }
    trace!(rows = rows.len(), "read rows");
    Ok(rows)
}

/// Integer stored in a floating point record slot.
#[allow(
    clippy::cast_possible_truncation,
    reason = "table indices and counts are small integers written as reals"
)]
pub(crate) fn as_index(v: f64) -> i32 {
    v as i32
}
