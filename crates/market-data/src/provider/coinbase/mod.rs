//! Coinbase provider for crypto spot prices.
//!
//! ```text
//! GET https://api.coinbase.com/v2/prices/ETH-USD/spot
//! {"data":{"amount":"3421.55","base":"ETH","currency":"USD"}}
//! ```
//!
//! Amounts come back as strings, so they are parsed straight into `Decimal`.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{CryptoPair, Quote};
use crate::provider::{fetch_text, PriceProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "COINBASE";

/// Public API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com/v2";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SpotPriceResponse {
    data: SpotPrice,
}

#[derive(Debug, Deserialize)]
struct SpotPrice {
    amount: String,
    #[allow(dead_code)]
    base: String,
    currency: String,
}

/// Coinbase spot price provider.
pub struct CoinbaseProvider {
    client: Client,
    base_url: String,
}

impl CoinbaseProvider {
    /// Create a provider against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, REQUEST_TIMEOUT)
    }

    /// Create a provider against a custom endpoint.
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

    fn spot_url(&self, pair: &CryptoPair) -> String {
        format!(
            "{}/prices/{}-{}/spot",
            self.base_url,
            urlencoding::encode(&pair.base),
            urlencoding::encode(&pair.quote)
        )
    }

    /// Returns the quoted currency and price from a response body.
    fn parse_spot(body: &str) -> Result<(String, Decimal), MarketDataError> {
        let response: SpotPriceResponse = serde_json::from_str(body)
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, e.to_string()))?;

        let amount = response.data.amount.trim();
        let price = Decimal::from_str(amount).map_err(|_| MarketDataError::ValidationFailed {
            message: format!("Unparseable amount '{}'", amount),
        })?;

        Ok((response.data.currency, price))
    }
}

impl Default for CoinbaseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CoinbaseProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        2
    }

    async fn get_latest_quote(&self, pair: &CryptoPair) -> Result<Quote, MarketDataError> {
        pair.validate()?;

        let url = self.spot_url(pair);
        debug!("Fetching {} from {}", pair, PROVIDER_ID);

        let body = fetch_text(&self.client, PROVIDER_ID, &url).await?;
        let (currency, price) = Self::parse_spot(&body)?;

        if !currency.eq_ignore_ascii_case(&pair.quote) {
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                format!("Expected {} quote, got {}", pair.quote, currency),
            ));
        }

        let quote = Quote::new(price, pair.quote.clone(), PROVIDER_ID.to_string());
        quote.validate()?;
        Ok(quote)
    }
}
