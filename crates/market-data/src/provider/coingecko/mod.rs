//! CoinGecko provider for crypto spot prices.
//!
//! Uses the public `simple/price` endpoint, which needs no API key:
//!
//! ```text
//! GET https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=usd
//! {"ethereum":{"usd":3421.55}}
//! ```

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{CryptoPair, Quote};
use crate::provider::{fetch_text, PriceProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response shape: coin id -> (lowercase currency -> price)
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// CoinGecko spot price provider.
///
/// # Example
///
/// ```ignore
/// use ethfolio_market_data::provider::coingecko::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new();
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, REQUEST_TIMEOUT)
    }

    /// Create a provider against a custom endpoint (proxy, pro API, test server).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Map a ticker symbol onto CoinGecko's coin id.
    fn coin_id(symbol: &str) -> Option<&'static str> {
        match symbol {
            "ETH" => Some("ethereum"),
            "BTC" => Some("bitcoin"),
            "SOL" => Some("solana"),
            "USDC" => Some("usd-coin"),
            _ => None,
        }
    }

    fn price_url(&self, coin_id: &str, currency: &str) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url,
            urlencoding::encode(coin_id),
            urlencoding::encode(currency)
        )
    }

    /// Extract the price for `coin_id` in `currency` from a response body.
    fn parse_price(body: &str, coin_id: &str, currency: &str) -> Result<Decimal, MarketDataError> {
        let response: SimplePriceResponse = serde_json::from_str(body)
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, e.to_string()))?;

        let price = response
            .get(coin_id)
            .and_then(|prices| prices.get(currency))
            .ok_or_else(|| MarketDataError::SymbolNotFound(format!("{}/{}", coin_id, currency)))?;

        Decimal::try_from(*price).map_err(|_| MarketDataError::ValidationFailed {
            message: format!("Failed to convert {} to decimal", price),
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    async fn get_latest_quote(&self, pair: &CryptoPair) -> Result<Quote, MarketDataError> {
        pair.validate()?;

        let coin_id = Self::coin_id(&pair.base)
            .ok_or_else(|| MarketDataError::SymbolNotFound(pair.base.clone()))?;
        let currency = pair.quote.to_lowercase();

        let url = self.price_url(coin_id, &currency);
        debug!("Fetching {} from {}", pair, PROVIDER_ID);

        let body = fetch_text(&self.client, PROVIDER_ID, &url).await?;
        let price = Self::parse_price(&body, coin_id, &currency)?;

        let quote = Quote::new(price, pair.quote.clone(), PROVIDER_ID.to_string());
        quote.validate()?;
        Ok(quote)
    }
}
