//! Run title and schedule timing: TITLE, START, DATES, TSTEP.

use chrono::{Datelike, NaiveDate};
use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;

use super::read_records;
use crate::vector::read_vector;
use crate::{DeckReader, DeckWriter, RecordReader, SpecialKeyword};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Month number of a deck month name. `JLY` is an accepted spelling of July.
fn month_number(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();
    if upper == "JLY" {
        return Some(7);
    }
    MONTHS
        .iter()
        .position(|m| *m == upper)
        .and_then(|i| u32::try_from(i + 1).ok())
}

/// `day month year`, with the day already read.
fn read_date(record: &mut RecordReader<'_, '_>, day: &str) -> Result<NaiveDate, DeckError> {
    let month_name = record.required_string("month")?;
    let year: i32 = record.required_number("year")?;
    let day = day.parse::<u32>().ok();
    let month = month_number(&month_name);
    day.zip(month)
        .and_then(|(d, m)| NaiveDate::from_ymd_opt(year, m, d))
        .ok_or_else(|| {
            record
                .reader()
                .malformed(format!("invalid date {month_name} {year}"))
        })
}

fn write_date(out: &mut DeckWriter, date: NaiveDate) {
    let month = MONTHS[date.month0() as usize];
    out.field(&i32::try_from(date.day()).unwrap_or_default())
        .field(month)
        .field(&date.year());
    out.end_record();
}

// === TITLE ===

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Title {
    pub title: String,
}

impl SpecialKeyword for Title {
    const NAME: &'static str = "TITLE";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        if reader.is_eof() {
            return Err(reader.unexpected_end());
        }
        let title = reader.read_line().trim().to_string();
        Ok(Title { title })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.line(&self.title);
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === START ===

/// Simulation start date.
#[derive(Clone, Debug, PartialEq)]
pub struct Start {
    pub date: NaiveDate,
}

impl SpecialKeyword for Start {
    const NAME: &'static str = "START";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let day = reader.next_token()?.text;
        let mut record = RecordReader::new(reader);
        let date = read_date(&mut record, day)?;
        record.finish()?;
        Ok(Start { date })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_date(out, self.date);
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === DATES ===

/// Report dates, in deck order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dates {
    pub dates: Vec<NaiveDate>,
}

impl SpecialKeyword for Dates {
    const NAME: &'static str = "DATES";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let dates = read_records(reader, |record, day| read_date(record, &day))?;
        Ok(Dates { dates })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        for date in &self.dates {
            write_date(out, *date);
        }
        out.end_list();
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === TSTEP ===

/// Report step lengths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tstep {
    pub steps: Vec<f64>,
}

impl SpecialKeyword for Tstep {
    const NAME: &'static str = "TSTEP";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        Ok(Tstep {
            steps: read_vector(reader)?,
        })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        out.fields(&self.steps);
        out.end_record();
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for step in &mut self.steps {
            *step *= units.time;
        }
        Ok(())
    }
}
