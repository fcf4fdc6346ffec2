//! # Currency Configuration
//!
//! How amounts are rendered for the customer.
//!
//! The embedding application owns where these settings come from; this
//! crate only defines the shape and the GBP defaults. Amounts are always
//! pence, so two minor digits are fixed.

use serde::{Deserialize, Serialize};

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFormat {
    /// Currency code (ISO 4217). Recorded on formatting events; not rendered.
    pub code: String,

    /// Currency symbol (for display)
    pub symbol: String,
}

impl Default for CurrencyFormat {
    /// Pounds sterling: `GBP`, `£`.
    fn default() -> Self {
        CurrencyFormat {
            code: "GBP".to_string(),
            symbol: "£".to_string(),
        }
    }
}
