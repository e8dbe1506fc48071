//! # Settings
//!
//! Layered runtime configuration.
//!
//! Settings are read once at startup from `config/default.toml`
//! (optionally overridden by `config/local.toml`) merged with `APP__*`
//! environment variables, then shared immutably across requests.
//!
//! Individual values are validated lazily, not at load time: accessors
//! return `Option` and each consumer decides what absence means. A
//! missing API key therefore only surfaces when the provider that
//! needs it is first exercised.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root of the runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// HTTP server and outbound call settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Quote pipeline settings.
    #[serde(default)]
    pub quotes: QuotesSettings,
}

impl Settings {
    /// Loads settings from the configuration files and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or the
    /// merged tree does not deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

/// HTTP server and outbound call settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address the server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Timeout applied to each outbound provider call, in milliseconds.
    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_upstream_timeout_ms() -> u64 {
    5000
}

/// Settings for the quoting pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotesSettings {
    /// Currency selection.
    #[serde(default)]
    pub currencies: CurrencySettings,
    /// Upstream API endpoints.
    #[serde(default)]
    pub apis: ApiSettings,
}

impl QuotesSettings {
    /// Returns the configured base currency, if present and non-empty.
    #[must_use]
    pub fn base_currency(&self) -> Option<&str> {
        non_empty(self.currencies.base.as_deref())
    }

    /// Returns the configured target currencies.
    ///
    /// An empty slice means the value is absent from configuration.
    #[must_use]
    pub fn required_currencies(&self) -> &[String] {
        &self.currencies.required
    }
}

/// Base and target currency configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencySettings {
    /// Currency the asset price is obtained in and rates are anchored to.
    #[serde(default)]
    pub base: Option<String>,
    /// Target currencies the service quotes in.
    #[serde(default)]
    pub required: Vec<String>,
}

/// Endpoints of both upstream APIs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSettings {
    /// Price API (CoinMarketCap).
    #[serde(default)]
    pub coinmarketcap: ApiCredentials,
    /// Rates API (exchangerates-style).
    #[serde(default)]
    pub exchange_rates: ApiCredentials,
}

/// URL and key of one upstream API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCredentials {
    /// Endpoint URL.
    #[serde(default)]
    pub url: Option<String>,
    /// API key.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ApiCredentials {
    /// Returns the endpoint URL, if present and non-empty.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    /// Returns the API key, if present and non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn deserializes_full_tree() {
        let settings = from_toml(
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"
            upstream_timeout_ms = 1500

            [quotes.currencies]
            base = "USD"
            required = ["USD", "EUR"]

            [quotes.apis.coinmarketcap]
            url = "https://price.test"
            api_key = "price-key"

            [quotes.apis.exchange_rates]
            url = "https://rates.test"
            api_key = "rates-key"
            "#,
        );

        assert_eq!(settings.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(settings.server.upstream_timeout_ms, 1500);
        assert_eq!(settings.quotes.base_currency(), Some("USD"));
        assert_eq!(settings.quotes.required_currencies(), ["USD", "EUR"]);
        assert_eq!(
            settings.quotes.apis.coinmarketcap.url(),
            Some("https://price.test")
        );
        assert_eq!(
            settings.quotes.apis.exchange_rates.api_key(),
            Some("rates-key")
        );
    }

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.server.upstream_timeout_ms, 5000);
        assert_eq!(settings.quotes.base_currency(), None);
        assert!(settings.quotes.required_currencies().is_empty());
        assert_eq!(settings.quotes.apis.coinmarketcap.url(), None);
    }

    #[test]
    fn accessors_treat_blank_values_as_absent() {
        let settings = from_toml(
            r#"
            [quotes.currencies]
            base = "  "

            [quotes.apis.coinmarketcap]
            url = ""
            api_key = "key"
            "#,
        );
        assert_eq!(settings.quotes.base_currency(), None);
        assert_eq!(settings.quotes.apis.coinmarketcap.url(), None);
        assert_eq!(settings.quotes.apis.coinmarketcap.api_key(), Some("key"));
    }
}
