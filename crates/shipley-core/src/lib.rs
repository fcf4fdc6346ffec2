//! # shipley-core: Pure Pricing Logic for the Shipley Till
//!
//! Prices a shopping cart of named items, applies per-item offers, and
//! renders the result as a sterling string. Everything here is a pure
//! function over a fixed, read-only catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller (till application, tests)                                       │
//! │     │  ["apple", "orange", ...]                                         │
//! │     ▼                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ shipley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │   money   │  │  config   │  │   │
//! │  │   │  prices   │  │  totals   │  │   Money   │  │ Currency  │  │   │
//! │  │   │  offers   │  │  offers   │  │  (pence)  │  │  Format   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED MUTABLE STATE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │     │                                                                   │
//! │     ▼  "£1.45"  /  PriceBreakdown                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed price list and its offers
//! - [`pricing`] - Totals, counts, discounts, formatting
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Cart, offer rules, price breakdowns
//! - [`config`] - Currency display settings
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shipley_core::pricing::{cart_total_after_discount, cart_total_before_discount};
//!
//! let cart = ["apple", "apple", "orange", "apple"];
//!
//! assert_eq!(cart_total_before_discount(&cart).unwrap(), "£2.05");
//! // Three apples: one pair, so one apple free
//! assert_eq!(cart_total_after_discount(&cart).unwrap(), "£1.45");
//!
//! // Unknown items abort the whole calculation
//! assert!(cart_total_before_discount(&["apple", "orangutan"]).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::CurrencyFormat;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::{
    cart_total, cart_total_after_discount, cart_total_before_discount, format_currency,
    format_currency_with, item_count, offer_discount, price_cart, unit_price,
};
pub use types::*;
