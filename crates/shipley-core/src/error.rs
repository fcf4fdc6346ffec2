//! # Error Types
//!
//! Domain-specific error types for shipley-core.
//!
//! ## Where Errors Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Failing vs. Degrading                             │
//! │                                                                         │
//! │  unit_price / cart_total ──► unknown name ──► UnrecognizedItem          │
//! │  format_currency         ──► negative     ──► NegativeAmount            │
//! │                                                                         │
//! │  item_count / offer_discount ──► unknown name ──► 0 (never an error)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, amount)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// An error aborts the whole calculation that raised it. No partial total
/// is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A cart element or lookup argument is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Typo in an item name (`"appl"`)
    /// - Case mismatch (`"Apple"`); names are matched exactly
    /// - An item the shop doesn't sell (`"orangutan"`)
    #[error("Unrecognised item in cart: {0}")]
    UnrecognizedItem(String),

    /// An amount below zero reached the currency formatter.
    #[error("Cannot format negative amount: {0} pence")]
    NegativeAmount(i64),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnrecognizedItem("orangutan".to_string());
        assert_eq!(err.to_string(), "Unrecognised item in cart: orangutan");

        let err = CoreError::NegativeAmount(-5);
        assert_eq!(err.to_string(), "Cannot format negative amount: -5 pence");
    }
}
