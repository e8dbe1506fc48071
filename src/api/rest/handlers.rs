//! # REST Handlers
//!
//! Request handlers and the error-to-status mapping.
//!
//! The handlers own the sole mapping from the provider error taxonomy
//! to HTTP status codes: upstream failures become 400, missing response
//! data becomes 404, and configuration or unclassified failures become
//! 500 with a generic body. Internal detail is logged here and never
//! leaked to the caller.

use crate::application::services::QuoteService;
use crate::domain::entities::Quote;
use crate::infrastructure::providers::error::ProviderError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The quote aggregation service.
    quote_service: QuoteService,
}

impl AppState {
    /// Creates the shared state.
    #[must_use]
    pub fn new(quote_service: QuoteService) -> Self {
        Self { quote_service }
    }
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Stable, non-leaking error message.
    pub message: String,
}

/// JSON body returned by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
}

/// Error type rendered by the REST layer.
#[derive(Debug)]
pub enum ApiError {
    /// The code path segment was empty or blank.
    CodeRequired,
    /// A provider or the quote service failed.
    Provider(ProviderError),
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        Self::Provider(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::CodeRequired => {
                return (StatusCode::BAD_REQUEST, "Code is required").into_response();
            }
            Self::Provider(error) => match error {
                ProviderError::Upstream { message } => (StatusCode::BAD_REQUEST, message),
                ProviderError::NotFound { message } => (StatusCode::NOT_FOUND, message),
                ProviderError::Configuration { message } => {
                    tracing::error!(%message, "configuration failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
                ProviderError::Internal { message } => {
                    tracing::error!(%message, "unclassified failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

/// Returns the quote for the asset in the path.
///
/// The code is upper-cased before the service is invoked; an empty or
/// blank code is rejected without consulting the providers.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        return Err(ApiError::CodeRequired);
    }

    tracing::info!(%code, "quote requested");
    let quote = state.quote_service.get_quote(&code).await?;
    Ok(Json(quote))
}

/// Rejects quote requests that carry no code segment at all.
pub async fn code_required() -> ApiError {
    ApiError::CodeRequired
}

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
