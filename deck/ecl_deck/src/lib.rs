//! Eclipse Deck Reader
//!
//! Reads a whole deck: keyword names are dispatched to the grammars of
//! `ecl_keywords`, the declared unit system is tracked, and cross-keyword
//! physical checks run once everything is read.
//!
//! ```text
//! text -> Deck::parse -> Deck (deck units)
//!                          | convert_to_si (once per keyword)
//!                          v
//!                        Deck (SI) -> write (deck units again)
//! ```

mod checks;
mod deck;

pub use checks::check_saturation_endpoints;
pub use deck::{Deck, DeckEntry};

pub use ecl_diagnostic::{DeckError, DeckErrorKind, ErrorCode, Location};
pub use ecl_keywords::{keywords, Defaulted, Keyword, KeywordKind, KeywordVariant, SpecialKeyword};
pub use ecl_units::{UnitMultipliers, UnitSystem};

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "ECL_LOG";

static TRACING_INIT: Once = Once::new();

/// Send deck reading logs to stderr, filtered by [`LOG_ENV`].
///
/// `ECL_LOG=ecl_deck=debug` logs one line per keyword and unit system;
/// `ECL_LOG=ecl_keywords=trace` adds every record and skipped item. An
/// unparsable filter falls back to `warn`.
///
/// Returns `true` if this call installed the subscriber: only the first
/// call can, and only when the variable is set.
pub fn init_tracing() -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV) else {
            return;
        };
        let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init()
            .is_ok();
    });
    installed
}
