//! # CoinMarketCap Provider
//!
//! Price adapter backed by the CoinMarketCap quote API.
//!
//! Issues a single `GET {url}?symbol={code}&convert={base}` with the
//! API key in the `X-CMC_PRO_API_KEY` header and extracts the price at
//! `data.{code}[0].quote.{base}.price` from the reply. The reply is
//! decoded into a typed schema; a missing price anywhere along that
//! path is reported as not-found rather than chased dynamically.

use crate::domain::entities::AssetPrice;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http::{HttpClient, HttpError};
use crate::infrastructure::providers::traits::PriceProvider;
use crate::infrastructure::settings::QuotesSettings;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Header carrying the CoinMarketCap API key.
const API_KEY_HEADER: &str = "x-cmc_pro_api_key";

/// Quote endpoint reply, reduced to the fields the pipeline reads.
///
/// Wire shape: `{"data": {"<CODE>": [{"quote": {"<BASE>": {"price": n}}}]}}`.
#[derive(Debug, Default, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    data: HashMap<String, Vec<PriceListing>>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceListing {
    #[serde(default)]
    quote: HashMap<String, CurrencyQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrencyQuote {
    price: Option<Decimal>,
}

/// Price provider backed by CoinMarketCap.
#[derive(Debug, Clone)]
pub struct CoinMarketCapProvider {
    settings: Arc<QuotesSettings>,
    client: HttpClient,
}

impl CoinMarketCapProvider {
    /// Creates a new provider over the shared settings and client.
    #[must_use]
    pub fn new(settings: Arc<QuotesSettings>, client: HttpClient) -> Self {
        Self { settings, client }
    }

    fn api_key_headers(api_key: &str) -> ProviderResult<HeaderMap> {
        let value = HeaderValue::from_str(api_key)
            .map_err(|_| ProviderError::configuration("price API key is not a valid header value"))?;
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(headers)
    }
}

#[async_trait]
impl PriceProvider for CoinMarketCapProvider {
    async fn fetch_price(&self, code: &str) -> ProviderResult<AssetPrice> {
        tracing::info!(code, "getting price");

        let base_currency = self
            .settings
            .base_currency()
            .ok_or_else(|| ProviderError::configuration("base currency missing"))?;
        let api = &self.settings.apis.coinmarketcap;
        let url = api
            .url()
            .ok_or_else(|| ProviderError::configuration("price API URL missing"))?;
        let api_key = api
            .api_key()
            .ok_or_else(|| ProviderError::configuration("price API key missing"))?;

        let headers = Self::api_key_headers(api_key)?;
        let params = [("symbol", code), ("convert", base_currency)];
        let response: PriceResponse = self
            .client
            .get_with_params_and_headers(url, &params, headers)
            .await
            .map_err(|error| match error {
                HttpError::Decode(message) => {
                    tracing::error!(%message, "undecodable price response");
                    ProviderError::not_found("price not found in response")
                }
                error => {
                    tracing::error!(%error, "price request failed");
                    ProviderError::upstream("failed to get price")
                }
            })?;

        let price = response
            .data
            .get(code)
            .and_then(|listings| listings.first())
            .and_then(|listing| listing.quote.get(base_currency))
            .and_then(|quote| quote.price)
            .ok_or_else(|| ProviderError::not_found("price not found in response"))?;

        tracing::info!(code, %price, "fetched price");

        Ok(AssetPrice::new(code, base_currency, price))
    }
}
