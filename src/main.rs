//! Service entry point: configuration, wiring and the HTTP server.

use anyhow::Context;
use crypto_quotes::api::rest::{AppState, create_router};
use crypto_quotes::application::services::QuoteService;
use crypto_quotes::infrastructure::providers::{
    CoinMarketCapProvider, ExchangeRatesProvider, HttpClient,
};
use crypto_quotes::infrastructure::settings::Settings;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = Settings::load().context("failed to load settings")?;
    let quotes = Arc::new(settings.quotes.clone());
    let client = HttpClient::new(settings.server.upstream_timeout_ms)?;

    let price_provider = Arc::new(CoinMarketCapProvider::new(
        Arc::clone(&quotes),
        client.clone(),
    ));
    let rate_provider = Arc::new(ExchangeRatesProvider::new(quotes, client));
    let quote_service = QuoteService::new(price_provider, rate_provider);

    let state = Arc::new(AppState::new(quote_service));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.server.listen_addr))?;
    tracing::info!(addr = %settings.server.listen_addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
