//! The deck: every keyword read from one input, in order.

use ecl_diagnostic::DeckError;
use ecl_keywords::keywords::{Sgof, Swof};
use ecl_keywords::{DeckReader, DeckWriter, Keyword, KeywordVariant};
use ecl_lexer_core::SourceBuffer;
use ecl_units::{UnitMultipliers, UnitSystem};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::checks::check_saturation_endpoints;

/// One keyword of a deck.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckEntry {
    pub keyword: Keyword,
    /// The multipliers this keyword was converted with; `None` while its
    /// values are in deck units.
    pub converted: Option<UnitMultipliers>,
}

impl DeckEntry {
    pub fn new(keyword: Keyword) -> Self {
        DeckEntry {
            keyword,
            converted: None,
        }
    }

    pub fn is_converted(&self) -> bool {
        self.converted.is_some()
    }

    /// Convert to SI unless already done.
    fn convert(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        if self.converted.is_some() {
            return Ok(());
        }
        self.keyword.convert_to_si(units)?;
        self.converted = Some(*units);
        Ok(())
    }
}

/// Keywords in deck order, plus the declared unit system.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    units: UnitSystem,
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// An empty deck in `units`.
    pub fn new(units: UnitSystem) -> Self {
        Deck {
            units,
            entries: Vec::new(),
        }
    }

    /// Read every keyword of `text`.
    ///
    /// `METRIC`, `FIELD` and `LAB` select the unit system and are not kept
    /// as keywords. Anything after a keyword name on its line is ignored.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let buf = SourceBuffer::new(text);
        let mut reader = DeckReader::new(buf.cursor());
        let mut deck = Deck::default();
        loop {
            reader.skip_trivia();
            let Some(token) = reader.try_next_token() else {
                break;
            };
            let name = token.text;
            if token.is_quoted() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return Err(reader.malformed(format!("expected a keyword name, found `{name}`")));
            }
            let line = reader.location().line;
            reader.skip_rest_of_line();
            if let Some(units) = UnitSystem::from_keyword(name) {
                debug!(%units, line, "unit system declared");
                deck.units = units;
                continue;
            }
            debug!(keyword = name, line, "reading keyword");
            let keyword = Keyword::read(name, &mut reader)?;
            deck.entries.push(DeckEntry::new(keyword));
        }
        debug!(keywords = deck.entries.len(), units = %deck.units, "deck read");
        deck.check_consistency()?;
        Ok(deck)
    }

    /// Cross-keyword physical checks.
    pub fn check_consistency(&self) -> Result<(), DeckError> {
        if let (Some(swof), Some(sgof)) = (self.get::<Swof>(), self.get::<Sgof>()) {
            check_saturation_endpoints(swof, sgof)?;
        }
        Ok(())
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in deck order.
    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.iter().map(|e| &e.keyword)
    }

    /// Append a keyword, in deck units.
    pub fn push(&mut self, keyword: impl Into<Keyword>) {
        self.entries.push(DeckEntry::new(keyword.into()));
    }

    /// The last declaration of `K`; later declarations override earlier
    /// ones.
    pub fn get<K: KeywordVariant>(&self) -> Option<&K> {
        self.entries
            .iter()
            .rev()
            .find_map(|e| K::from_keyword(&e.keyword))
    }

    /// Every declaration of `K`, in deck order.
    pub fn get_all<'a, K: KeywordVariant + 'a>(&'a self) -> impl Iterator<Item = &'a K> {
        self.entries.iter().filter_map(|e| K::from_keyword(&e.keyword))
    }

    /// `true` if a keyword named `name` was read, ignored ones included.
    pub fn contains(&self, name: &str) -> bool {
        self.keywords().any(|k| k.name() == name)
    }

    /// Convert every keyword not yet converted from the deck's units to SI.
    pub fn convert_to_si(&mut self) -> Result<(), DeckError> {
        let units = self.units.multipliers();
        self.convert_to_si_with(&units)
    }

    /// Convert every keyword not yet converted with explicit multipliers.
    ///
    /// Keywords are independent, so they are converted in parallel. On
    /// error, keywords converted so far stay marked and are skipped by the
    /// next call.
    pub fn convert_to_si_with(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let pending = self.entries.iter().filter(|e| !e.is_converted()).count();
        trace!(pending, "converting keywords to SI");
        self.entries
            .par_iter_mut()
            .try_for_each(|entry| entry.convert(units))
    }

    /// Deck text for every keyword, in deck units.
    ///
    /// Converted keywords are converted back on a copy first.
    pub fn write(&self) -> Result<String, DeckError> {
        let mut out = DeckWriter::with_capacity(64 * self.entries.len());
        if let Some(name) = self.units.keyword() {
            out.keyword(name);
        }
        for entry in &self.entries {
            match &entry.converted {
                Some(units) => {
                    let mut keyword = entry.keyword.clone();
                    keyword.convert_to_si(&units.inverse())?;
                    keyword.write(&mut out);
                }
                None => entry.keyword.write(&mut out),
            }
        }
        Ok(out.output())
    }
}
