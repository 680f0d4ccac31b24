//! Mixed string/number records.
//!
//! Named records (`'W1' 'G1' 3 4 1* 'OIL' /`) interleave strings and
//! numbers, and a `k*` may span fields of both kinds. [`RecordReader`] keeps
//! the count of defaults still owed, so each field accessor either consumes
//! one owed default or reads the deck. The repetitions of a `k*v` that a
//! [`RecordReader::skip`] only partly consumed are owed the same way, with
//! their value.

use ecl_diagnostic::{DeckError, DeckErrorKind};
use ecl_lexer_core::RawTokenKind;
use tracing::trace;

use crate::vector::{default_count, read_defaulted_inner, DeckNumber, Slot, VectorItem};
use crate::{DeckReader, Defaulted};

/// Field-by-field reader for one `/`-terminated record.
pub struct RecordReader<'r, 'a> {
    reader: &'r mut DeckReader<'a>,
    pending_defaults: usize,
    /// Value text of the `k*v` the owed fields repeat; `None` for defaults.
    pending_value: Option<&'a str>,
    terminated: bool,
}

/// What the next field gets before any token is read.
enum Owed<'a> {
    Nothing,
    Default,
    Value(&'a str),
}

impl<'r, 'a> RecordReader<'r, 'a> {
    pub fn new(reader: &'r mut DeckReader<'a>) -> Self {
        RecordReader {
            reader,
            pending_defaults: 0,
            pending_value: None,
            terminated: false,
        }
    }

    /// `true` once the record's `/` has been read.
    ///
    /// Every later field comes back defaulted.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn reader(&self) -> &DeckReader<'a> {
        self.reader
    }

    /// Take one owed field, if any.
    fn take_owed(&mut self) -> Owed<'a> {
        if self.terminated {
            return Owed::Default;
        }
        if self.pending_defaults == 0 {
            return Owed::Nothing;
        }
        let value = self.pending_value;
        self.settle(1);
        match value {
            Some(text) => Owed::Value(text),
            None => Owed::Default,
        }
    }

    /// Pay `n` owed fields.
    fn settle(&mut self, n: usize) {
        self.pending_defaults -= n;
        if self.pending_defaults == 0 {
            self.pending_value = None;
        }
    }

    fn terminate(&mut self) {
        self.reader.skip_rest_of_line();
        self.terminated = true;
    }

    // --- Strings ---

    /// A string field. Bare or quoted; a bare `*` or `k*` defaults it (and
    /// the `k-1` fields after it).
    pub fn string(&mut self, default: &str) -> Result<Defaulted<String>, DeckError> {
        match self.take_owed() {
            Owed::Default => return Ok(Defaulted::Default(default.to_string())),
            Owed::Value(text) => return Ok(Defaulted::Given(text.to_string())),
            Owed::Nothing => {}
        }
        let token = self.reader.next_token()?;
        if token.is_terminator() {
            self.terminate();
            return Ok(Defaulted::Default(default.to_string()));
        }
        match token.kind {
            RawTokenKind::UnterminatedQuote => {
                return Err(self.reader.malformed(format!(
                    "unterminated quote in `'{}`",
                    token.text
                )));
            }
            RawTokenKind::Bare => {
                if let Some(count) = default_count(token.text) {
                    self.pending_defaults = count - 1;
                    self.pending_value = None;
                    return Ok(Defaulted::Default(default.to_string()));
                }
            }
            RawTokenKind::Quoted => {}
        }
        Ok(Defaulted::Given(token.text.to_string()))
    }

    /// A string field that may not be defaulted.
    pub fn required_string(&mut self, what: &str) -> Result<String, DeckError> {
        match self.string("")? {
            Defaulted::Given(s) => Ok(s),
            Defaulted::Default(_) => Err(self.reader.malformed(format!("{what} is required"))),
        }
    }

    // --- Numbers ---

    /// Fill consecutive numeric fields.
    ///
    /// Returns the number of slots visited, like the vector reader. Defaults
    /// of a `k*` reaching past the last slot are owed to the next fields.
    /// Fields still owed by a skipped `k*v` take its value.
    pub fn numbers<S: Slot>(&mut self, slots: &mut [S]) -> Result<usize, DeckError> {
        if self.terminated {
            return Ok(0);
        }
        let owed = self.pending_defaults.min(slots.len());
        if let Some(text) = self.pending_value.filter(|_| owed > 0) {
            let Some(v) = <S::Value as DeckNumber>::parse_deck(text) else {
                return Err(self.reader.error(DeckErrorKind::malformed_vector(text)));
            };
            for slot in &mut slots[..owed] {
                slot.fill(v);
            }
        }
        self.settle(owed);
        if owed == slots.len() {
            return Ok(owed);
        }
        let run = read_defaulted_inner(self.reader, &mut slots[owed..])?;
        self.pending_defaults += run.overflow;
        self.terminated = run.terminated;
        Ok(owed + run.visited)
    }

    /// One numeric field.
    pub fn number<T: DeckNumber>(&mut self, default: T) -> Result<Defaulted<T>, DeckError> {
        let mut slot = [Defaulted::Default(default)];
        self.numbers(&mut slot)?;
        let [field] = slot;
        Ok(field)
    }

    /// A numeric field that may not be defaulted.
    pub fn required_number<T: DeckNumber>(&mut self, what: &str) -> Result<T, DeckError> {
        let mut slot: [Option<T>; 1] = [None];
        self.numbers(&mut slot)?;
        match slot {
            [Some(v)] => Ok(v),
            [None] => Err(self.reader.malformed(format!("{what} is required"))),
        }
    }

    // --- Structure ---

    /// Discard `n` items, counting `k*` and `k*v` as `k` items.
    ///
    /// Returns the number of items actually discarded; fewer than `n` means
    /// the record ended.
    pub fn skip(&mut self, n: usize) -> Result<usize, DeckError> {
        let mut skipped = 0;
        while skipped < n {
            if self.terminated {
                break;
            }
            if self.pending_defaults > 0 {
                let owed = self.pending_defaults.min(n - skipped);
                self.settle(owed);
                skipped += owed;
                continue;
            }
            let token = self.reader.next_token()?;
            if token.is_terminator() {
                self.terminate();
                break;
            }
            let (count, value) = if token.is_quoted() {
                (1, None)
            } else {
                match VectorItem::<f64>::parse(token.text) {
                    Some(VectorItem::Defaults(k)) => (k, None),
                    Some(VectorItem::Repeat(k, _)) => {
                        (k, token.text.split_once('*').map(|(_, v)| v))
                    }
                    _ => (1, None),
                }
            };
            let taken = count.min(n - skipped);
            self.pending_defaults = count - taken;
            self.pending_value = if count > taken { value } else { None };
            skipped += taken;
        }
        Ok(skipped)
    }

    /// End the record: consume its `/` unless a field read already did.
    ///
    /// Unread trailing items are discarded.
    pub fn finish(self) -> Result<(), DeckError> {
        if self.terminated {
            return Ok(());
        }
        loop {
            let token = self.reader.next_token()?;
            if token.is_terminator() {
                self.reader.skip_rest_of_line();
                return Ok(());
            }
            trace!(item = token.text, "discarding trailing record item");
        }
    }

    /// End a row whose `/` is optional: consume one only if it comes next.
    pub fn finish_row(self) {
        if !self.terminated {
            self.reader.consume_terminator();
        }
    }
}
