use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::Result;

/// Source of the current ETH price in USD.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Returns the current price of one ETH in USD. Always positive on success.
    async fn get_eth_price(&self) -> Result<Decimal>;
}
