//! # Asset Price Entity
//!
//! The price of one crypto asset, denominated in the configured base
//! currency, as reported by the price provider.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The price of a single asset in the base currency.
///
/// Produced by the price provider once per request and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPrice {
    /// Asset code, e.g. `BTC`.
    code: String,
    /// Currency the price is denominated in.
    base_currency: String,
    /// Price of one unit of the asset in the base currency.
    price_in_base: Decimal,
}

impl AssetPrice {
    /// Creates a new asset price.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        base_currency: impl Into<String>,
        price_in_base: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            base_currency: base_currency.into(),
            price_in_base,
        }
    }

    /// Returns the asset code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the currency the price is denominated in.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Returns the price of one unit in the base currency.
    #[must_use]
    pub fn price_in_base(&self) -> Decimal {
        self.price_in_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let price = AssetPrice::new("BTC", "USD", Decimal::from(50_000));
        assert_eq!(price.code(), "BTC");
        assert_eq!(price.base_currency(), "USD");
        assert_eq!(price.price_in_base(), Decimal::from(50_000));
    }
}
