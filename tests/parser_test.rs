//! Checks over the pure library surface: card parsing, bound rules and
//! the card assertions the price scenarios are built from.

use hosting_e2e::model::{Bounds, Currency, PriceCard};
use hosting_e2e::scenarios::check_card;
use hosting_e2e::utils::parse_price_card;

#[test]
fn test_card_text_splits_into_symbol_and_amount() {
    let card = parse_price_card("$ 129").unwrap();
    assert_eq!(
        card,
        PriceCard {
            symbol: "$".to_string(),
            amount: 129.0
        }
    );
}

#[test]
fn test_thousands_separator_is_stripped_before_comparison() {
    let card = parse_price_card("€ 1,234.56").unwrap();
    assert_eq!(card.symbol, Currency::Eur.symbol());
    assert_eq!(card.amount, 1234.56);
}

#[test]
fn test_malformed_card_text_is_rejected() {
    assert!(parse_price_card("129").is_err());
    assert!(parse_price_card("$129").is_err());
    assert!(parse_price_card("$ 129 monthly").is_err());
}

// Defaults (1, 100) with delta (10, 10): min 11 and max 90 are accepted,
// while one below the default minimum is not.
#[test]
fn test_boundary_deltas_against_defaults() {
    let defaults = Bounds { min: 1, max: 100 };

    assert!(defaults.min_accepts(defaults.min + 10));
    assert!(defaults.max_accepts(defaults.max - 10));
    assert!(!defaults.min_accepts(defaults.min - 1));
    assert!(!defaults.max_accepts(defaults.max + 1));
}

#[test]
fn test_dedicated_usd_card_check() {
    let adjusted = Bounds { min: 0, max: 1000 };
    let symbol = Currency::Usd.symbol();

    assert!(check_card("$ 129", symbol, adjusted).is_ok());
    assert!(check_card("$ 999.99", symbol, adjusted).is_ok());

    // Wrong currency fails even inside the range
    assert!(check_card("€ 129", symbol, adjusted).is_err());
    // Right currency fails outside the range
    assert!(check_card("$ 1,200.50", symbol, adjusted).is_err());
}

#[test]
fn test_narrowed_bounds_reject_edges() {
    let adjusted = Bounds { min: 11, max: 90 };
    let symbol = Currency::Usd.symbol();

    assert!(check_card("$ 11", symbol, adjusted).is_ok());
    assert!(check_card("$ 90", symbol, adjusted).is_ok());
    assert!(check_card("$ 10", symbol, adjusted).is_err());
    assert!(check_card("$ 91", symbol, adjusted).is_err());
}
