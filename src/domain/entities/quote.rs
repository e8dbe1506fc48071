//! # Quote Entity
//!
//! The per-currency price map returned to the caller for one asset.
//!
//! This module provides the [`Quote`] entity combining an asset code
//! with its price expressed in every quoted target currency.
//!
//! # Examples
//!
//! ```
//! use crypto_quotes::domain::entities::quote::Quote;
//! use rust_decimal::Decimal;
//! use std::collections::HashMap;
//!
//! let mut prices = HashMap::new();
//! prices.insert("USD".to_string(), Decimal::from(50_000));
//! prices.insert("EUR".to_string(), Decimal::from(45_000));
//!
//! let quote = Quote::new("BTC", prices);
//! assert_eq!(quote.code(), "BTC");
//! assert_eq!(quote.price_in("EUR"), Some(Decimal::from(45_000)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The quoted price of one asset in every target currency.
///
/// Serializes to the wire shape
/// `{ "code": "...", "quote": { "<CURRENCY>": <number>, ... } }`.
/// No iteration order is guaranteed for the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Asset code the quote is for.
    code: String,
    /// Price per target currency code.
    #[serde(rename = "quote")]
    prices_by_currency: HashMap<String, Decimal>,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(code: impl Into<String>, prices_by_currency: HashMap<String, Decimal>) -> Self {
        Self {
            code: code.into(),
            prices_by_currency,
        }
    }

    /// Returns the asset code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the price in `currency`, if quoted.
    #[must_use]
    pub fn price_in(&self, currency: &str) -> Option<Decimal> {
        self.prices_by_currency.get(currency).copied()
    }

    /// Returns the full price map.
    #[must_use]
    pub fn prices_by_currency(&self) -> &HashMap<String, Decimal> {
        &self.prices_by_currency
    }
}
