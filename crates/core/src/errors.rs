//! Core error types for the Ethfolio application.

use thiserror::Error;

use crate::config::ConfigError;
use crate::investments::InvestmentError;
use ethfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Investment error: {0}")]
    Investment(#[from] InvestmentError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
