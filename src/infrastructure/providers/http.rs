//! # HTTP Client
//!
//! Shared outbound HTTP client for the upstream providers.
//!
//! This module wraps [`reqwest::Client`] with:
//! - A bounded per-request timeout
//! - Typed JSON decoding
//! - Classification of transport, status and decode failures
//!
//! Each provider maps [`HttpError`] values onto its own entries in the
//! provider error taxonomy, so the wrapper stays ignorant of the
//! taxonomy's messages.
//!
//! # Examples
//!
//! ```ignore
//! use crypto_quotes::infrastructure::providers::http::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let reply: MyReply = client.get_with_params(url, &[("base", "USD")]).await?;
//! ```

use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Error type for outbound HTTP calls.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or the connection failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server replied with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The response arrived but its body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The underlying client could not be constructed.
    #[error("http client error: {0}")]
    Client(String),
}

impl HttpError {
    /// Returns true if the server replied with a non-success status.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    /// Returns true if a reply arrived but could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Outbound HTTP client with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Client` if the underlying client cannot be
    /// built.
    pub fn new(timeout_ms: u64) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| HttpError::Client(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and decodes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Timeout`/`HttpError::Connection` if the
    /// request fails, `HttpError::Status` on a non-success reply and
    /// `HttpError::Decode` if the body cannot be decoded.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> Result<T, HttpError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a GET request with query parameters and extra headers and
    /// decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Same classification as [`HttpClient::get_with_params`].
    pub async fn get_with_params_and_headers<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
        headers: HeaderMap,
    ) -> Result<T, HttpError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .headers(headers)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the status and decodes the body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status(status));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::Decode(e.to_string()))
}

/// Maps a transport-level reqwest error.
fn map_reqwest_error(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Connection(error.to_string())
    }
}
