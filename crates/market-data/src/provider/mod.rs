//! Price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait that all providers implement
//! - A shared HTTP helper for status and transport error mapping
//! - Concrete provider implementations (CoinGecko, Coinbase)

mod http;
mod traits;

pub mod coinbase;
pub mod coingecko;

pub use traits::PriceProvider;

pub(crate) use http::fetch_text;
