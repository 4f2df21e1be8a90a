use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::PriceServiceTrait;
use crate::config::{Config, PriceProviderKind};
use crate::Result;
use ethfolio_market_data::{
    CoinGeckoProvider, CoinbaseProvider, CryptoPair, PriceProvider, ProviderRegistry,
};

/// Fetches ETH/USD through the configured provider chain.
///
/// No caching and no retries: every call goes to the providers.
pub struct PriceService {
    registry: ProviderRegistry,
    pair: CryptoPair,
}

impl PriceService {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            pair: CryptoPair::eth_usd(),
        }
    }

    /// Builds the provider chain listed in configuration, tried in the
    /// order it is listed.
    pub fn from_config(config: &Config) -> Self {
        let providers: Vec<Arc<dyn PriceProvider>> = config
            .price_providers
            .iter()
            .map(|kind| -> Arc<dyn PriceProvider> {
                match kind {
                    PriceProviderKind::CoinGecko => Arc::new(CoinGeckoProvider::with_base_url(
                        config.coingecko_url.clone(),
                        config.price_timeout,
                    )),
                    PriceProviderKind::Coinbase => Arc::new(CoinbaseProvider::with_base_url(
                        config.coinbase_url.clone(),
                        config.price_timeout,
                    )),
                }
            })
            .collect();

        let registry = ProviderRegistry::in_order(providers);
        debug!("Price providers: {:?}", registry.provider_ids());
        Self::new(registry)
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_eth_price(&self) -> Result<Decimal> {
        let quote = self.registry.fetch_latest(&self.pair).await.map_err(|e| {
            warn!("Failed to fetch {}: {}", self.pair, e);
            e
        })?;
        Ok(quote.price)
    }
}
