//! # Provider Ports
//!
//! Port definitions for the two upstream data sources.
//!
//! The quote service depends on these traits rather than on concrete
//! adapters, so tests substitute in-memory doubles and all wiring stays
//! at the composition root.
//!
//! # Examples
//!
//! ```ignore
//! use crypto_quotes::infrastructure::providers::traits::PriceProvider;
//!
//! #[derive(Debug)]
//! struct MyPriceProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl PriceProvider for MyPriceProvider {
//!     // ... implement fetch_price
//! }
//! ```

use crate::domain::entities::{AssetPrice, ExchangeRates};
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Source of asset prices denominated in the configured base currency.
#[async_trait]
pub trait PriceProvider: Send + Sync + fmt::Debug {
    /// Fetches the price of the asset identified by `code`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Configuration` if required settings are
    /// absent, `ProviderError::Upstream` if the single outbound call
    /// fails, and `ProviderError::NotFound` if the reply carries no
    /// price.
    async fn fetch_price(&self, code: &str) -> ProviderResult<AssetPrice>;
}

/// Source of exchange rates from the base currency to the configured
/// target currencies.
#[async_trait]
pub trait RateProvider: Send + Sync + fmt::Debug {
    /// Fetches the current rates from the configured base currency.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Configuration` if required settings are
    /// absent, `ProviderError::Upstream` if the single outbound call
    /// fails, and `ProviderError::NotFound` if the reply carries no
    /// rates.
    async fn fetch_rates(&self) -> ProviderResult<ExchangeRates>;
}
