//! # Domain Entities
//!
//! Immutable request-scoped values produced and consumed by the quoting
//! pipeline.
//!
//! - [`AssetPrice`]: one asset's price in the base currency
//! - [`ExchangeRates`]: rates from the base currency to the targets
//! - [`Quote`]: the per-currency price map returned to the caller

pub mod asset_price;
pub mod exchange_rates;
pub mod quote;

pub use asset_price::AssetPrice;
pub use exchange_rates::ExchangeRates;
pub use quote::Quote;
