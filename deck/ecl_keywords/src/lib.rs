//! Eclipse Special Keywords
//!
//! Record grammars, deck writers and SI conversion for the multi-line,
//! table-shaped keywords of an Eclipse deck.
//!
//! # Architecture
//!
//! Reading is layered, bottom-up:
//!
//! 1. **Vector reader**: defaulted numeric runs with `k*`, `k*v` and early `/`
//! 2. **Record reader**: named records mixing strings and numbers
//! 3. **Table readers**: fixed-width region tables and PVTO/PVTG tables
//! 4. **Keyword grammars**: one type per keyword implementing [`SpecialKeyword`]
//!
//! Every keyword also writes itself back ([`DeckWriter`]) and rescales its
//! deck-unit values to SI ([`SpecialKeyword::convert_to_si`]).
//!
//! # Modules
//!
//! - [`vector`]: defaulted-vector grammar
//! - [`table`]: region tables
//! - [`keywords`]: the keyword grammars, grouped by deck section
//! - [`writer`]: deck text output

mod defaulted;
mod keyword;
pub mod keywords;
mod reader;
mod record;
pub mod table;
pub mod vector;
pub mod writer;

pub use defaulted::Defaulted;
pub use keyword::{Keyword, KeywordKind, KeywordVariant, SpecialKeyword};
pub use reader::DeckReader;
pub use record::RecordReader;
pub use writer::{DeckField, DeckWriter};
