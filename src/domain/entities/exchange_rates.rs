//! # Exchange Rates Entity
//!
//! Exchange rates from the base currency to a set of target currencies,
//! as reported by the rate provider.
//!
//! # Examples
//!
//! ```
//! use crypto_quotes::domain::entities::exchange_rates::ExchangeRates;
//! use rust_decimal::Decimal;
//! use std::collections::HashMap;
//!
//! let mut rates = HashMap::new();
//! rates.insert("EUR".to_string(), Decimal::new(9, 1));
//!
//! let rates = ExchangeRates::new("USD", rates);
//! assert_eq!(rates.base_currency(), "USD");
//! assert_eq!(rates.rate("EUR"), Some(Decimal::new(9, 1)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange rates anchored to one base currency.
///
/// Keys are target currency codes; values are the amount of the target
/// currency one unit of the base currency buys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Currency the rates are anchored to.
    base_currency: String,
    /// Rate per target currency code.
    rates: HashMap<String, Decimal>,
}

impl ExchangeRates {
    /// Creates a new set of exchange rates.
    #[must_use]
    pub fn new(base_currency: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates,
        }
    }

    /// Returns the base currency code.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Returns the rate for `currency`, if present.
    #[must_use]
    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        self.rates.get(currency).copied()
    }

    /// Returns the full rate map.
    #[must_use]
    pub fn rates(&self) -> &HashMap<String, Decimal> {
        &self.rates
    }

    /// Returns the number of target currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
