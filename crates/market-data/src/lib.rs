//! Ethfolio Market Data Crate
//!
//! This crate provides provider-agnostic spot price fetching for the
//! Ethfolio investment tracker.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    CryptoPair    |  (ETH/USD)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ProviderRegistry |  (priority order, failover)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  PriceProvider   |  (CoinGecko, Coinbase)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |      Quote       |  (spot price)
//! +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::{MarketDataError, RetryClass};
pub use models::{CryptoPair, Quote};
pub use provider::coinbase::CoinbaseProvider;
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::PriceProvider;
pub use registry::ProviderRegistry;
