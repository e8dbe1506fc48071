//! # Provider Errors
//!
//! Error taxonomy shared by the upstream providers and the quote
//! service.
//!
//! The taxonomy separates the three failure classes the HTTP boundary
//! reacts to differently: operator misconfiguration, a failed upstream
//! call, and a well-formed upstream reply missing the expected data.
//! Providers raise the most specific applicable variant; the quote
//! service propagates it untouched.
//!
//! # Examples
//!
//! ```
//! use crypto_quotes::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::upstream("failed to get price");
//! assert!(error.is_upstream());
//! assert!(!error.is_configuration());
//! ```

use thiserror::Error;

/// Error type for provider and quote operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// A required configuration value is missing or empty.
    ///
    /// Operator error; the caller cannot self-correct it.
    #[error("configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// The outbound call failed or returned a non-success status.
    #[error("upstream error: {message}")]
    Upstream {
        /// Error message.
        message: String,
    },

    /// The provider responded successfully but the expected field was
    /// absent from the reply.
    #[error("not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// Unclassified internal failure.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an upstream error.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns true if this is an upstream error.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the inner message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message }
            | Self::Upstream { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_classification() {
        let error = ProviderError::configuration("base currency missing");
        assert!(error.is_configuration());
        assert!(!error.is_upstream());
        assert!(!error.is_not_found());
    }

    #[test]
    fn upstream_classification() {
        let error = ProviderError::upstream("failed to get price");
        assert!(error.is_upstream());
        assert_eq!(error.message(), "failed to get price");
    }

    #[test]
    fn not_found_classification() {
        let error = ProviderError::not_found("price not found in response");
        assert!(error.is_not_found());
    }

    #[test]
    fn display_format() {
        let error = ProviderError::configuration("price API URL missing");
        let display = error.to_string();
        assert!(display.contains("configuration"));
        assert!(display.contains("price API URL missing"));

        let error = ProviderError::internal("boom");
        assert!(error.to_string().contains("internal"));
    }
}
