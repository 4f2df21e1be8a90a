//! Provider registry for orchestrating price providers.
//!
//! The registry holds the configured providers sorted by priority and asks
//! them in turn until one returns a valid quote.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{CryptoPair, Quote};
use crate::provider::PriceProvider;

/// Provider registry for spot price fetching.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn PriceProvider>>,
}

impl ProviderRegistry {
    /// Create a registry; providers are ordered by ascending priority.
    pub fn new(mut providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    /// Create a registry that tries providers exactly in the given order,
    /// ignoring their default priorities.
    pub fn in_order(providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self { providers }
    }

    /// Provider ids in the order they will be tried.
    pub fn provider_ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Fetch the latest quote for a pair.
    ///
    /// Tries providers in priority order. A failure classified
    /// [`RetryClass::NextProvider`] moves on to the next provider; a
    /// [`RetryClass::Never`] failure is returned immediately. When every
    /// provider fails, the last error is returned.
    pub async fn fetch_latest(&self, pair: &CryptoPair) -> Result<Quote, MarketDataError> {
        if self.providers.is_empty() {
            warn!("No providers configured for {}", pair);
            return Err(MarketDataError::NoProvidersAvailable);
        }

        let mut last_error: Option<MarketDataError> = None;

        for provider in &self.providers {
            match provider.get_latest_quote(pair).await {
                Ok(quote) => {
                    info!(
                        "Got {} = {} {} from '{}'",
                        pair,
                        quote.price,
                        quote.currency,
                        provider.id()
                    );
                    return Ok(quote);
                }
                Err(e) => match e.retry_class() {
                    RetryClass::Never => {
                        warn!("Provider '{}' failed terminally for {}: {}", provider.id(), pair, e);
                        return Err(e);
                    }
                    RetryClass::NextProvider => {
                        debug!("Provider '{}' failed for {}: {}, trying next", provider.id(), pair, e);
                        last_error = Some(e);
                    }
                },
            }
        }

        let error = last_error.unwrap_or(MarketDataError::NoProvidersAvailable);
        warn!("All providers failed for {}: {}", pair, error);
        Err(error)
    }
}
