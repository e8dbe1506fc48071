//! # Exchange Rates Provider
//!
//! Rate adapter backed by an exchangerates-style API.
//!
//! Issues a single
//! `GET {url}?base={base}&symbols={csv}&access_key={key}` and extracts
//! the `rates` object from the reply.

use crate::domain::entities::ExchangeRates;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http::{HttpClient, HttpError};
use crate::infrastructure::providers::traits::RateProvider;
use crate::infrastructure::settings::QuotesSettings;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Rates endpoint reply, reduced to the fields the pipeline reads.
///
/// Wire shape: `{"rates": {"<CURRENCY>": n, ...}}`.
#[derive(Debug, Default, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

/// Rate provider backed by an exchangerates-style API.
#[derive(Debug, Clone)]
pub struct ExchangeRatesProvider {
    settings: Arc<QuotesSettings>,
    client: HttpClient,
}

impl ExchangeRatesProvider {
    /// Creates a new provider over the shared settings and client.
    #[must_use]
    pub fn new(settings: Arc<QuotesSettings>, client: HttpClient) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl RateProvider for ExchangeRatesProvider {
    async fn fetch_rates(&self) -> ProviderResult<ExchangeRates> {
        tracing::info!("getting currency rates");

        let base_currency = self
            .settings
            .base_currency()
            .ok_or_else(|| ProviderError::configuration("base currency missing"))?;
        let api = &self.settings.apis.exchange_rates;
        let url = api
            .url()
            .ok_or_else(|| ProviderError::configuration("rates API URL missing"))?;
        let api_key = api
            .api_key()
            .ok_or_else(|| ProviderError::configuration("rates API key missing"))?;
        let required = self.settings.required_currencies();
        if required.is_empty() {
            return Err(ProviderError::configuration("required currencies missing"));
        }

        let symbols = required.join(",");
        let params = [
            ("base", base_currency),
            ("symbols", symbols.as_str()),
            ("access_key", api_key),
        ];
        let response: RatesResponse = self
            .client
            .get_with_params(url, &params)
            .await
            .map_err(|error| match error {
                HttpError::Decode(message) => {
                    tracing::error!(%message, "undecodable rates response");
                    ProviderError::not_found("currency rates not found in response")
                }
                error => {
                    tracing::error!(%error, "rates request failed");
                    ProviderError::upstream("failed to get currency rates")
                }
            })?;

        if response.rates.is_empty() {
            return Err(ProviderError::not_found(
                "currency rates not found in response",
            ));
        }

        tracing::info!(count = response.rates.len(), "fetched currency rates");

        // Returned rates are taken as-is: a required currency the API
        // did not return is simply absent from the quote.
        Ok(ExchangeRates::new(base_currency, response.rates))
    }
}
