//! Defaulted-vector reader.
//!
//! Numeric record data is a whitespace separated list where
//! - `v` sets one slot,
//! - `k*v` sets the next `k` slots to `v`,
//! - `*` or `k*` leaves one or `k` slots at their default,
//! - `/` ends the record early; the rest of that line is discarded.
//!
//! A count above [`MAX_REPEAT`] is not a repetition, so `k*v` with such a
//! count is `MalformedVectorRecord`.

use ecl_diagnostic::{DeckError, DeckErrorKind};
use tracing::trace;

use crate::{DeckReader, Defaulted};

/// A number type that can appear in a deck record.
pub trait DeckNumber: Copy + PartialEq + std::fmt::Debug {
    /// Parse a bare token. `None` if the token is not a number of this type.
    fn parse_deck(text: &str) -> Option<Self>;
}

impl DeckNumber for f64 {
    /// Accepts Fortran `D` exponents (`1.5D-3`).
    fn parse_deck(text: &str) -> Option<Self> {
        let first = *text.as_bytes().first()?;
        if !(first.is_ascii_digit() || matches!(first, b'+' | b'-' | b'.')) {
            return None;
        }
        let numeric = |b: u8| {
            b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E' | b'd' | b'D')
        };
        if !text.bytes().all(numeric) {
            return None;
        }
        if text.contains(['d', 'D']) {
            text.replace(['d', 'D'], "e").parse().ok()
        } else {
            text.parse().ok()
        }
    }
}

impl DeckNumber for i32 {
    fn parse_deck(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// One numeric record item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VectorItem<T> {
    Value(T),
    /// `*` or `k*`.
    Defaults(usize),
    /// `k*v`.
    Repeat(usize, T),
}

impl<T: DeckNumber> VectorItem<T> {
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once('*') {
            None => T::parse_deck(text).map(VectorItem::Value),
            Some(("", "")) => Some(VectorItem::Defaults(1)),
            Some((count, value)) => {
                let count = parse_count(count)?;
                if value.is_empty() {
                    Some(VectorItem::Defaults(count))
                } else {
                    T::parse_deck(value).map(|v| VectorItem::Repeat(count, v))
                }
            }
        }
    }
}

/// The count of a bare default marker: `*` is 1, `k*` is `k`.
pub fn default_count(text: &str) -> Option<usize> {
    match text.strip_suffix('*')? {
        "" => Some(1),
        count => parse_count(count),
    }
}

/// Largest `k` accepted in `k*` and `k*v`.
pub const MAX_REPEAT: usize = 1 << 24;

fn parse_count(text: &str) -> Option<usize> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|&k| (1..=MAX_REPEAT).contains(&k))
}

/// Something a vector item can be stored into.
pub trait Slot {
    type Value: DeckNumber;

    fn fill(&mut self, value: Self::Value);
}

impl<T: DeckNumber> Slot for Defaulted<T> {
    type Value = T;

    fn fill(&mut self, value: T) {
        *self = Defaulted::Given(value);
    }
}

/// Defaulted entries stay `None`.
impl<T: DeckNumber> Slot for Option<T> {
    type Value = T;

    fn fill(&mut self, value: T) {
        *self = Some(value);
    }
}

impl Slot for f64 {
    type Value = f64;

    fn fill(&mut self, value: f64) {
        *self = value;
    }
}

impl Slot for i32 {
    type Value = i32;

    fn fill(&mut self, value: i32) {
        *self = value;
    }
}

/// Outcome of one defaulted-vector read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorRun {
    /// Slots visited, whether filled or left at their default.
    pub visited: usize,
    /// Defaults of the last `k*` that did not fit in the slots.
    pub overflow: usize,
    /// `/` was reached (and its line consumed).
    pub terminated: bool,
}

/// Fill up to `slots.len()` slots; see the module docs for the grammar.
///
/// Returns the number of slots visited. Fewer than `slots.len()` means a `/`
/// was read. A `k*` running past the end is clamped; a `k*v` running past
/// the end is `MalformedVectorRecord`.
pub fn read_defaulted<S: Slot>(
    reader: &mut DeckReader<'_>,
    slots: &mut [S],
) -> Result<usize, DeckError> {
    read_defaulted_inner(reader, slots).map(|run| run.visited)
}

/// [`read_defaulted`], also reporting default overflow and termination.
pub fn read_defaulted_inner<S: Slot>(
    reader: &mut DeckReader<'_>,
    slots: &mut [S],
) -> Result<VectorRun, DeckError> {
    let len = slots.len();
    let mut i = 0;
    while i < len {
        let token = reader.next_token()?;
        if token.is_terminator() {
            reader.skip_rest_of_line();
            trace!(visited = i, of = len, "vector ended early");
            return Ok(VectorRun {
                visited: i,
                overflow: 0,
                terminated: true,
            });
        }
        let item = if token.is_quoted() {
            None
        } else {
            VectorItem::<S::Value>::parse(token.text)
        };
        match item {
            Some(VectorItem::Value(v)) => {
                slots[i].fill(v);
                i += 1;
            }
            Some(VectorItem::Defaults(k)) => {
                let left = len - i;
                if k > left {
                    return Ok(VectorRun {
                        visited: len,
                        overflow: k - left,
                        terminated: false,
                    });
                }
                i += k;
            }
            Some(VectorItem::Repeat(k, v)) if k <= len - i => {
                for slot in &mut slots[i..i + k] {
                    slot.fill(v);
                }
                i += k;
            }
            Some(VectorItem::Repeat(..)) | None => {
                return Err(reader.error(DeckErrorKind::malformed_vector(token.text)));
            }
        }
    }
    Ok(VectorRun {
        visited: len,
        overflow: 0,
        terminated: false,
    })
}

/// Read values up to `/`, however many there are.
///
/// `k*v` expands; default markers are malformed since there is nothing to
/// default to.
pub fn read_vector<T: DeckNumber>(reader: &mut DeckReader<'_>) -> Result<Vec<T>, DeckError> {
    let mut values = Vec::new();
    loop {
        let token = reader.next_token()?;
        if token.is_terminator() {
            reader.skip_rest_of_line();
            return Ok(values);
        }
        let item = if token.is_quoted() {
            None
        } else {
            VectorItem::<T>::parse(token.text)
        };
        match item {
            Some(VectorItem::Value(v)) => values.push(v),
            Some(VectorItem::Repeat(k, v)) => values.extend(std::iter::repeat(v).take(k)),
            Some(VectorItem::Defaults(_)) | None => {
                return Err(reader.error(DeckErrorKind::malformed_vector(token.text)));
            }
        }
    }
}

#[cfg(test)]
mod tests;
