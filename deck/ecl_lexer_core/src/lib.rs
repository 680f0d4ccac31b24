//! Low-level lexical layer for Eclipse deck text.
//!
//! This crate knows nothing about keywords. It provides:
//! - [`SourceBuffer`]: an owned, sentinel-terminated copy of the deck text
//! - [`Cursor`]: a `Copy` byte cursor with the deck's lexical primitives
//!   (skip to end of line, skip whitespace, peek the next significant byte,
//!   read a possibly quoted token)
//! - [`Lookahead`]: classification of what follows the current position,
//!   used by record loops to decide whether more data rows follow
//!
//! # Grammar Facts Encoded Here
//!
//! - Tokens are whitespace delimited. `'...'` is a single token and keeps
//!   embedded whitespace.
//! - `/` is always a token of its own, even when glued to a value (`0.5/`).
//! - `--` starts a comment that runs to the end of the physical line.

mod cursor;
mod lookahead;
mod source_buffer;

pub use cursor::{Cursor, LineCol, RawToken, RawTokenKind};
pub use lookahead::Lookahead;
pub use source_buffer::SourceBuffer;
