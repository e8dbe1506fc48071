//! # REST API
//!
//! REST endpoints using axum.
//!
//! This module provides the inbound HTTP surface of the service: the
//! quote endpoint, its error-to-status mapping, and a health check.
//!
//! # Endpoints
//!
//! - `GET /api/quote/{code}` - Price of `code` in every quoted target
//!   currency
//! - `GET /api/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use crypto_quotes::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(quote_service));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
