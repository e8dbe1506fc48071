//! # REST Routes
//!
//! Route table for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router over the shared state.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/quote/{code}", get(handlers::get_quote))
        .route("/api/quote", get(handlers::code_required))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::QuoteService;
    use crate::domain::entities::{AssetPrice, ExchangeRates};
    use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
    use crate::infrastructure::providers::traits::{PriceProvider, RateProvider};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct StubPriceProvider {
        result: ProviderResult<AssetPrice>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PriceProvider for StubPriceProvider {
        async fn fetch_price(&self, _code: &str) -> ProviderResult<AssetPrice> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[derive(Debug)]
    struct StubRateProvider {
        result: ProviderResult<ExchangeRates>,
    }

    #[async_trait]
    impl RateProvider for StubRateProvider {
        async fn fetch_rates(&self) -> ProviderResult<ExchangeRates> {
            self.result.clone()
        }
    }

    fn sample_rates() -> ExchangeRates {
        let mut rates = std::collections::HashMap::new();
        rates.insert("USD".to_string(), Decimal::ONE);
        rates.insert("EUR".to_string(), Decimal::new(9, 1));
        ExchangeRates::new("USD", rates)
    }

    fn router_with(
        price: ProviderResult<AssetPrice>,
        rates: ProviderResult<ExchangeRates>,
    ) -> (Router, Arc<StubPriceProvider>) {
        let price_provider = Arc::new(StubPriceProvider {
            result: price,
            calls: AtomicUsize::new(0),
        });
        let service = QuoteService::new(
            Arc::clone(&price_provider) as Arc<dyn PriceProvider>,
            Arc::new(StubRateProvider { result: rates }),
        );
        let router = create_router(Arc::new(AppState::new(service)));
        (router, price_provider)
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn quote_returns_converted_prices() {
        let (router, _) = router_with(
            Ok(AssetPrice::new("BTC", "USD", Decimal::from(50_000))),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote/btc").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "BTC");
        assert_eq!(json["quote"]["USD"], 50_000.0);
        assert_eq!(json["quote"]["EUR"], 45_000.0);
    }

    #[tokio::test]
    async fn missing_code_is_rejected_without_invoking_the_core() {
        let (router, price_provider) = router_with(
            Ok(AssetPrice::new("BTC", "USD", Decimal::from(1))),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Code is required");
        assert_eq!(price_provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_code_is_rejected_without_invoking_the_core() {
        let (router, price_provider) = router_with(
            Ok(AssetPrice::new("BTC", "USD", Decimal::from(1))),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote/%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Code is required");
        assert_eq!(price_provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_request() {
        let (router, _) = router_with(
            Err(ProviderError::upstream("failed to get price")),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote/BTC").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], "failed to get price");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (router, _) = router_with(
            Err(ProviderError::not_found("price not found in response")),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote/BTC").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "price not found in response");
    }

    #[tokio::test]
    async fn configuration_failure_maps_to_500_without_leaking() {
        let (router, _) = router_with(
            Err(ProviderError::configuration("base currency missing")),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/quote/BTC").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("base currency"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "internal server error");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (router, _) = router_with(
            Ok(AssetPrice::new("BTC", "USD", Decimal::from(1))),
            Ok(sample_rates()),
        );

        let (status, body) = send(router, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
