//! # crypto-quotes
//!
//! Current crypto asset prices converted into a configured set of fiat
//! currencies.
//!
//! The service obtains an asset's price in one base currency from the
//! CoinMarketCap quote API, obtains exchange rates from that base
//! currency to the configured target currencies from an
//! exchangerates-style API, and multiplies the two into a per-currency
//! price map served over HTTP.
//!
//! # Architecture
//!
//! - [`domain`]: immutable entities flowing through the pipeline
//! - [`application`]: the quote service orchestrating the providers
//! - [`infrastructure`]: settings plus the two upstream adapters
//! - [`api`]: the axum REST surface and its error-to-status mapping
//!
//! # Usage
//!
//! ```ignore
//! use crypto_quotes::api::rest::{AppState, create_router};
//! use crypto_quotes::application::services::QuoteService;
//! use crypto_quotes::infrastructure::providers::{
//!     CoinMarketCapProvider, ExchangeRatesProvider, HttpClient,
//! };
//! use crypto_quotes::infrastructure::settings::Settings;
//! use std::sync::Arc;
//!
//! let settings = Settings::load()?;
//! let quotes = Arc::new(settings.quotes.clone());
//! let client = HttpClient::new(settings.server.upstream_timeout_ms)?;
//!
//! let service = QuoteService::new(
//!     Arc::new(CoinMarketCapProvider::new(Arc::clone(&quotes), client.clone())),
//!     Arc::new(ExchangeRatesProvider::new(quotes, client)),
//! );
//! let router = create_router(Arc::new(AppState::new(service)));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
