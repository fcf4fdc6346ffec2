//! # Pricing
//!
//! Prices a cart of item names against the [catalog](crate::catalog).
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ["apple", "apple", "orange", "apple"]                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_total ──► 60 + 60 + 25 + 60 = 205p   (unknown name? ──► Err)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  item_count + offer_discount per offer                                  │
//! │     apple  ×3 ──► 1 pair    ──► 60p off                                 │
//! │     orange ×1 ──► 0 triples ──►  0p off                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  205 - 60 = 145p ──► format_currency ──► "£1.45"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup-based operations return [`CoreResult`]; counting and discounting
//! return plain values and treat unknown names as zero.

use tracing::{debug, trace, warn};

use crate::catalog;
use crate::config::CurrencyFormat;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineSummary, PriceBreakdown};

// =============================================================================
// Lookups and Totals
// =============================================================================

/// Unit price of a catalog item.
///
/// ## Example
/// ```rust
/// use shipley_core::pricing::unit_price;
///
/// assert_eq!(unit_price("apple").unwrap().pence(), 60);
/// assert!(unit_price("appl").is_err());
/// ```
pub fn unit_price(item: &str) -> CoreResult<Money> {
    match catalog::lookup(item) {
        Some(entry) => Ok(entry.unit_price),
        None => {
            warn!(item = %item, "Unrecognised item");
            Err(CoreError::UnrecognizedItem(item.to_string()))
        }
    }
}

/// Sum of unit prices of every item, before offers.
///
/// Stops at the first unrecognised item; no partial total is returned.
pub fn cart_total<S: AsRef<str>>(items: &[S]) -> CoreResult<Money> {
    let total = items
        .iter()
        .map(|item| unit_price(item.as_ref()))
        .sum::<CoreResult<Money>>()?;

    debug!(items = items.len(), subtotal = %total, "Cart totalled");
    Ok(total)
}

/// Number of items exactly equal to `item`. Never fails.
pub fn item_count<S: AsRef<str>>(items: &[S], item: &str) -> usize {
    items.iter().filter(|candidate| candidate.as_ref() == item).count()
}

/// Offer discount earned by `quantity` units of `item`.
///
/// Items without an offer, including names outside the catalog, earn zero.
///
/// ## Example
/// ```rust
/// use shipley_core::pricing::offer_discount;
///
/// assert_eq!(offer_discount("apple", 3).pence(), 60);   // one free apple
/// assert_eq!(offer_discount("orange", 6).pence(), 50);  // two free oranges
/// assert!(offer_discount("pear", 10).is_zero());
/// ```
pub fn offer_discount(item: &str, quantity: usize) -> Money {
    catalog::lookup(item)
        .and_then(|entry| entry.offer.map(|rule| rule.discount(entry.unit_price, quantity)))
        .unwrap_or_default()
}

/// Prices the cart and itemises the offers that applied.
///
/// Every catalog item with an offer and at least one unit in the cart gets
/// a line, even when its group is incomplete and the discount is zero.
///
/// ## Example
/// ```rust
/// use shipley_core::pricing::price_cart;
///
/// let breakdown = price_cart(&["apple", "orange", "orange", "orange", "orange"]).unwrap();
/// assert_eq!(breakdown.subtotal.pence(), 160);
/// assert_eq!(breakdown.discount.pence(), 25);
/// assert_eq!(breakdown.total.pence(), 135);
/// ```
pub fn price_cart<S: AsRef<str>>(items: &[S]) -> CoreResult<PriceBreakdown> {
    let subtotal = cart_total(items)?;

    let lines: Vec<LineSummary> = catalog::offers()
        .filter_map(|(entry, _)| {
            let quantity = item_count(items, entry.name);
            if quantity == 0 {
                return None;
            }
            let discount = offer_discount(entry.name, quantity);
            trace!(item = entry.name, quantity, discount = %discount, "Offer evaluated");
            Some(LineSummary {
                item: entry.name.to_string(),
                quantity,
                discount,
            })
        })
        .collect();

    let discount: Money = lines.iter().map(|line| line.discount).sum();
    let total = subtotal - discount;

    debug!(
        subtotal = %subtotal,
        discount = %discount,
        total = %total,
        "Cart priced"
    );

    Ok(PriceBreakdown {
        subtotal,
        lines,
        discount,
        total,
    })
}

// =============================================================================
// Formatted Totals
// =============================================================================

/// Pre-offer total, formatted (e.g. `"£2.05"`).
pub fn cart_total_before_discount<S: AsRef<str>>(items: &[S]) -> CoreResult<String> {
    format_currency(cart_total(items)?)
}

/// Total after offers, formatted (e.g. `"£1.45"`).
///
/// ## Example
/// ```rust
/// use shipley_core::pricing::cart_total_after_discount;
///
/// let cart = ["apple", "apple", "orange", "apple"];
/// assert_eq!(cart_total_after_discount(&cart).unwrap(), "£1.45");
/// ```
pub fn cart_total_after_discount<S: AsRef<str>>(items: &[S]) -> CoreResult<String> {
    format_currency(price_cart(items)?.total)
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Renders pence as sterling, e.g. `205` → `"£2.05"`.
///
/// Fails with [`CoreError::NegativeAmount`] for amounts below zero.
pub fn format_currency(amount: Money) -> CoreResult<String> {
    format_currency_with(amount, &CurrencyFormat::default())
}

/// Renders pence with the given currency symbol, zero-padding the pence.
pub fn format_currency_with(amount: Money, format: &CurrencyFormat) -> CoreResult<String> {
    if amount.is_negative() {
        warn!(currency = %format.code, pence = amount.pence(), "Refusing to format negative amount");
        return Err(CoreError::NegativeAmount(amount.pence()));
    }
    trace!(currency = %format.code, pence = amount.pence(), "Formatting amount");
    Ok(format!(
        "{}{}.{:02}",
        format.symbol,
        amount.pounds(),
        amount.pence_part()
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn known_item() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("apple"), Just("orange")]
    }

    proptest! {
        #[test]
        fn prop_apple_discount_per_pair(n in 0usize..10_000) {
            prop_assert_eq!(offer_discount("apple", n).pence(), (n / 2) as i64 * 60);
        }

        #[test]
        fn prop_orange_discount_per_triple(n in 0usize..10_000) {
            prop_assert_eq!(offer_discount("orange", n).pence(), (n / 3) as i64 * 25);
        }

        #[test]
        fn prop_unknown_item_never_discounted(name in "[a-z]{1,12}", n in 0usize..10_000) {
            prop_assume!(name != "apple" && name != "orange");
            prop_assert!(offer_discount(&name, n).is_zero());
        }

        #[test]
        fn prop_unknown_item_fails_at_any_position(
            cart in prop::collection::vec(known_item(), 0..20),
            position in any::<prop::sample::Index>(),
        ) {
            let mut cart = cart;
            let at = position.index(cart.len() + 1);
            cart.insert(at, "orangutan");
            prop_assert_eq!(
                cart_total(&cart),
                Err(CoreError::UnrecognizedItem("orangutan".to_string()))
            );
        }

        #[test]
        fn prop_count_unaffected_by_unknown_items(
            cart in prop::collection::vec(known_item(), 0..20),
            noise in prop::collection::vec("[A-Z]{1,6}", 0..10),
        ) {
            let mut noisy: Vec<String> = cart.iter().map(|s| s.to_string()).collect();
            noisy.extend(noise);
            prop_assert_eq!(item_count(&noisy, "apple"), item_count(&cart, "apple"));
            prop_assert_eq!(item_count(&noisy, "orange"), item_count(&cart, "orange"));
        }

        #[test]
        fn prop_total_is_subtotal_minus_discount(cart in prop::collection::vec(known_item(), 0..50)) {
            let breakdown = price_cart(&cart).unwrap();
            prop_assert_eq!(breakdown.total, breakdown.subtotal - breakdown.discount);
            prop_assert!(!breakdown.total.is_negative());
            prop_assert!(breakdown.discount <= breakdown.subtotal);
        }
    }
}
