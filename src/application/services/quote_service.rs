//! # Quote Service
//!
//! Orchestrates the price and rate providers into a single quote.
//!
//! The service fetches the asset price first and the exchange rates
//! second, then multiplies the price into every returned rate. Either
//! provider failure aborts the request and propagates unchanged; no
//! partial quote is ever produced.

use crate::domain::entities::Quote;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::traits::{PriceProvider, RateProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Combines one asset price with the exchange rates into a per-currency
/// price map.
#[derive(Debug, Clone)]
pub struct QuoteService {
    price_provider: Arc<dyn PriceProvider>,
    rate_provider: Arc<dyn RateProvider>,
}

impl QuoteService {
    /// Creates a new quote service over the given providers.
    #[must_use]
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        rate_provider: Arc<dyn RateProvider>,
    ) -> Self {
        Self {
            price_provider,
            rate_provider,
        }
    }

    /// Returns the price of `code` in every currency the rate provider
    /// reports.
    ///
    /// `code` is expected upper-cased by the caller; the service does
    /// not re-normalize it.
    ///
    /// # Errors
    ///
    /// Propagates the first provider error unchanged. A price failure
    /// aborts the request before the rate provider is consulted.
    pub async fn get_quote(&self, code: &str) -> ProviderResult<Quote> {
        tracing::info!(code, "getting quote");

        let price = self.price_provider.fetch_price(code).await?;
        let rates = self.rate_provider.fetch_rates().await?;

        let mut prices_by_currency = HashMap::with_capacity(rates.len());
        for (currency, rate) in rates.rates() {
            prices_by_currency.insert(currency.clone(), price.price_in_base() * rate);
        }

        Ok(Quote::new(code, prices_by_currency))
    }
}
