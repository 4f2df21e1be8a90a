//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`RetryClass`]: Classification for determining failover behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method, which determines how the provider registry should handle the error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol is unknown to the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (bad status, malformed payload).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a price that failed validation.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The requested pair is malformed; no provider can price it.
    #[error("Invalid pair: {0}")]
    InvalidPair(String),

    /// The registry has no providers configured.
    #[error("No providers available")]
    NoProvidersAvailable,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Builds a [`MarketDataError::ProviderError`] for the given provider id.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Maps a transport error from `reqwest` onto the provider it came from.
    pub fn from_request(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if err.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            Self::RateLimited {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// ```
    /// use ethfolio_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::NextProvider);
    ///
    /// let error = MarketDataError::NoProvidersAvailable;
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // A pair one provider cannot price may still be known to another
            Self::SymbolNotFound(_)
            | Self::RateLimited { .. }
            | Self::Timeout { .. }
            | Self::ProviderError { .. }
            | Self::ValidationFailed { .. }
            | Self::Network(_) => RetryClass::NextProvider,

            Self::InvalidPair(_) | Self::NoProvidersAvailable => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors_fail_over() {
        let error = MarketDataError::RateLimited {
            provider: "COINGECKO".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::NextProvider);

        let error = MarketDataError::Timeout {
            provider: "COINBASE".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::NextProvider);
    }

    #[test]
    fn test_symbol_not_found_fails_over() {
        let error = MarketDataError::SymbolNotFound("DOGE".to_string());
        assert_eq!(error.retry_class(), RetryClass::NextProvider);
    }

    #[test]
    fn test_invalid_pair_never_retries() {
        let error = MarketDataError::InvalidPair("/USD".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_no_providers_available_never_retries() {
        let error = MarketDataError::NoProvidersAvailable;
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("DOGE".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: DOGE");

        let error = MarketDataError::provider("COINBASE", "HTTP 503");
        assert_eq!(format!("{}", error), "Provider error: COINBASE - HTTP 503");

        let error = MarketDataError::ValidationFailed {
            message: "price must be positive".to_string(),
        };
        assert_eq!(format!("{}", error), "Validation failed: price must be positive");
    }
}
