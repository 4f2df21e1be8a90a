//! Price provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CryptoPair, Quote};

/// Trait for spot price providers.
///
/// Implement this trait to add support for a new price source. The registry
/// orders providers by [`priority`](Self::priority) and falls back to the next
/// one when a provider fails.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ethfolio_market_data::{CryptoPair, MarketDataError, PriceProvider, Quote};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PriceProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_quote(&self, pair: &CryptoPair) -> Result<Quote, MarketDataError> {
///         Ok(Quote::new(dec!(2000), pair.quote.clone(), "FIXED".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "COINGECKO".
    ///
    /// Used for logging and as the `source` of returned quotes.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Lower values = higher priority. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch the current spot quote for a pair.
    async fn get_latest_quote(&self, pair: &CryptoPair) -> Result<Quote, MarketDataError>;
}
