//! Log setup. Kept in its own test binary: the subscriber is process-wide.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ecl_deck::{init_tracing, Deck, LOG_ENV};

#[test]
fn subscriber_is_installed_once_from_env() {
    std::env::set_var(LOG_ENV, "ecl_deck=debug,ecl_keywords=trace");
    assert!(init_tracing());
    assert!(!init_tracing());

    // Reading with the subscriber active logs through it.
    let deck = Deck::parse("FIELD\nRPTRST\n 'BASIC=2' /\nPVTW\n 100 1 0 1 /\n").unwrap();
    assert_eq!(deck.len(), 2);
}
