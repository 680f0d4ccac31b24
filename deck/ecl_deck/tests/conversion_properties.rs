//! Property tests for unit conversion.
//!
//! Converting a deck to SI and writing it back out must give the deck
//! values again, up to rounding.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ecl_deck::keywords::{Compdat, Density, Pvtw, Wconinje};
use ecl_deck::{Deck, UnitSystem};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

fn unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![
        Just(UnitSystem::Metric),
        Just(UnitSystem::Field),
        Just(UnitSystem::Lab),
    ]
}

fn positive() -> impl Strategy<Value = f64> {
    1e-3..1e4_f64
}

fn deck_text(units: UnitSystem, v: &[f64; 8]) -> String {
    format!(
        "\
{units}
DENSITY
 {} {} {} /
PVTW
 {} {} {} {} 0 /
WCONINJE
 'I1' 'GAS' 'OPEN' 'RATE' {} /
/
COMPDAT
 'P1' 2 3 1 4 'OPEN' 1* 1* 0.2 {} /
/
",
        v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[1]
    )
}

proptest! {
    #[test]
    fn conversion_is_reversible(
        units in unit_system(),
        values in prop::array::uniform8(positive()),
    ) {
        let original = Deck::parse(&deck_text(units, &values)).unwrap();
        let mut converted = original.clone();
        converted.convert_to_si().unwrap();
        let restored = Deck::parse(&converted.write().unwrap()).unwrap();
        prop_assert_eq!(restored.units(), units);

        let (a, b) = (original.get::<Density>().unwrap(), restored.get::<Density>().unwrap());
        for (x, y) in [
            (a.records[0].oil, b.records[0].oil),
            (a.records[0].water, b.records[0].water),
            (a.records[0].gas, b.records[0].gas),
        ] {
            prop_assert!(close(*x, *y), "density {} != {}", *x, *y);
        }

        let (a, b) = (&original.get::<Pvtw>().unwrap().records[0], &restored.get::<Pvtw>().unwrap().records[0]);
        prop_assert!(close(a.reference_pressure, b.reference_pressure));
        prop_assert!(close(a.volume_factor, b.volume_factor));
        prop_assert!(close(a.compressibility, b.compressibility));
        prop_assert!(close(a.viscosity, b.viscosity));

        let (a, b) = (&original.get::<Wconinje>().unwrap().records[0], &restored.get::<Wconinje>().unwrap().records[0]);
        prop_assert!(close(*a.surface_rate, *b.surface_rate));
        prop_assert_eq!(a.reservoir_rate.is_default(), b.reservoir_rate.is_default());

        let (a, b) = (&original.get::<Compdat>().unwrap().records[0], &restored.get::<Compdat>().unwrap().records[0]);
        prop_assert!(close(*a.diameter, *b.diameter));
        prop_assert!(close(*a.kh, *b.kh));
    }

    #[test]
    fn si_values_scale_with_deck_values(value in positive()) {
        let text = format!("PVTW\n {value} 1 0 1 /\n");
        let mut deck = Deck::parse(&text).unwrap();
        deck.convert_to_si().unwrap();
        let pressure = deck.get::<Pvtw>().unwrap().records[0].reference_pressure;
        prop_assert!(close(pressure, value * UnitSystem::Metric.multipliers().pressure));
    }
}
