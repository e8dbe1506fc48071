//! # Upstream Providers
//!
//! Adapters for the two external data sources and the ports the quote
//! service consumes them through.
//!
//! ## Ports
//!
//! - [`PriceProvider`]: asset price in the base currency
//! - [`RateProvider`]: exchange rates from the base currency
//!
//! ## Implementations
//!
//! - [`CoinMarketCapProvider`]: price API adapter
//! - [`ExchangeRatesProvider`]: rates API adapter
//!
//! Both adapters share one [`HttpClient`] and report failures through
//! the [`ProviderError`] taxonomy.

pub mod coinmarketcap;
pub mod error;
pub mod exchange_rates;
pub mod http;
pub mod traits;

pub use coinmarketcap::CoinMarketCapProvider;
pub use error::{ProviderError, ProviderResult};
pub use exchange_rates::ExchangeRatesProvider;
pub use http::{HttpClient, HttpError};
pub use traits::{PriceProvider, RateProvider};
