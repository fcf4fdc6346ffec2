//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.60 + 0.25 + 0.60 = 1.4500000000000002  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    60 + 25 + 60 = 145 pence                                             │
//! │    Converted to "£1.45" only when rendered                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shipley_core::money::Money;
//!
//! // Create from pence (preferred)
//! let apple = Money::from_pence(60); // £0.60
//!
//! // Arithmetic operations
//! let three = apple * 3;                          // £1.80
//! let total = three + Money::from_pence(25);      // £2.05
//! assert_eq!(total.pence(), 205);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the minor unit of GBP).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays closed; the formatter rejects negatives
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer of pence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use shipley_core::money::Money;
    ///
    /// let price = Money::from_pence(205); // £2.05
    /// assert_eq!(price.pence(), 205);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pounds portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use shipley_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(205).pounds(), 2);
    /// assert_eq!(Money::from_pence(60).pounds(), 0);
    /// ```
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use shipley_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(205).pence_part(), 5);
    /// assert_eq!(Money::from_pence(-145).pence_part(), 45); // Absolute value
    /// ```
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shipley_core::money::Money;
    ///
    /// let orange = Money::from_pence(25);
    /// assert_eq!(orange.multiply_quantity(4).pence(), 100);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as pounds and pence, e.g. `£2.05` or `-£0.60`.
///
/// ## Note
/// Meant for logs. Customer-facing strings go through
/// [`crate::pricing::format_currency`], which refuses negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (group or unit quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(205)), "£2.05");
        assert_eq!(format!("{}", Money::from_pence(60)), "£0.60");
        assert_eq!(format!("{}", Money::from_pence(0)), "£0.00");
        assert_eq!(format!("{}", Money::from_pence(-60)), "-£0.60");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(180);
        let b = Money::from_pence(60);

        assert_eq!((a + b).pence(), 240);
        assert_eq!((a - b).pence(), 120);
        assert_eq!((b * 3).pence(), 180);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running.pence(), 120);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_pence(60), Money::from_pence(25), Money::from_pence(60)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.pence(), 145);
        assert_eq!(by_value, by_ref);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_bare_pence() {
        let json = serde_json::to_string(&Money::from_pence(145)).unwrap();
        assert_eq!(json, "145");
        let back: Money = serde_json::from_str("205").unwrap();
        assert_eq!(back.pence(), 205);
    }
}
