//! # Domain Types
//!
//! Value types shared by the catalog and the pricing functions.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Cart       │   │   OfferRule     │   │ PriceBreakdown  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items (names)  │   │  group_size     │   │  subtotal       │       │
//! │  │  in scan order  │   │  free_units     │   │  lines[]        │       │
//! │  └─────────────────┘   └─────────────────┘   │  discount       │       │
//! │                                              │  total          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Offer Rule
// =============================================================================

/// A quantity-threshold offer: `free_units` of every complete group of
/// `group_size` units are free.
///
/// ## Examples
/// - Buy one get one free: group 2, free 1
/// - Three for the price of two: group 3, free 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRule {
    /// Units that make up one complete group. Never zero.
    pub group_size: u32,

    /// Units discounted per complete group. At most `group_size`.
    pub free_units: u32,
}

impl OfferRule {
    /// Buy one, get one free.
    pub const BUY_ONE_GET_ONE_FREE: OfferRule = OfferRule {
        group_size: 2,
        free_units: 1,
    };

    /// Three for the price of two.
    pub const THREE_FOR_TWO: OfferRule = OfferRule {
        group_size: 3,
        free_units: 1,
    };

    /// Discount earned by `quantity` units at `unit_price`.
    ///
    /// Incomplete groups earn nothing, so the result never exceeds the cost
    /// of the units themselves.
    ///
    /// ## Example
    /// ```rust
    /// use shipley_core::money::Money;
    /// use shipley_core::types::OfferRule;
    ///
    /// let apple = Money::from_pence(60);
    /// let rule = OfferRule::BUY_ONE_GET_ONE_FREE;
    /// assert_eq!(rule.discount(apple, 3).pence(), 60);
    /// assert_eq!(rule.discount(apple, 4).pence(), 120);
    /// ```
    pub fn discount(&self, unit_price: Money, quantity: usize) -> Money {
        // Use i128 so huge quantities cannot overflow before clamping
        let quantity = quantity as i128;
        let price = i128::from(unit_price.pence());
        let groups = quantity / i128::from(self.group_size);
        let free = groups * i128::from(self.free_units);

        let cost = quantity * price;
        let discount = (free * price).clamp(0, cost.max(0)).min(i128::from(i64::MAX));
        Money::from_pence(discount as i64)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered list of item names as they were scanned.
///
/// Repeats and unknown names are allowed here; they only become an error
/// when the cart is priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends one scanned item.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Number of scanned items, unknown names included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items exactly equal to `name` (case-sensitive).
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| item.as_str() == name).count()
    }

    /// Scanned names in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The scanned names, for the slice-based pricing functions.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for Cart {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Offer applied to one catalog item present in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    /// Catalog name of the item.
    pub item: String,

    /// Units of the item in the cart.
    pub quantity: usize,

    /// Amount taken off by the item's offer (zero for incomplete groups).
    pub discount: Money,
}

/// Full result of pricing a cart.
///
/// ## Invariants
/// - `discount` is the sum of `lines[].discount`
/// - `total = subtotal - discount`, and is never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Sum of unit prices before any offer.
    pub subtotal: Money,

    /// One line per offer-bearing catalog item found in the cart.
    pub lines: Vec<LineSummary>,

    /// Sum of all offer discounts.
    pub discount: Money,

    /// Amount payable.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
