//! Fatal error reporting for deck reading and unit conversion.
//!
//! Every failure aborts the whole deck: there is no field-level recovery.
//! A [`DeckError`] therefore carries everything needed to find the problem
//! by eye:
//! - an [`ErrorCode`] for searchability
//! - the [`DeckErrorKind`] (what went wrong)
//! - the keyword being read and the line/column (where)
//! - the next unconsumed character, when there is one

mod error;
mod error_code;

pub use error::{DeckError, DeckErrorKind, Location};
pub use error_code::ErrorCode;
