use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// A base asset priced in a quote currency, e.g. ETH/USD.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CryptoPair {
    /// Base asset symbol (e.g., "ETH")
    pub base: String,

    /// Quote currency code (e.g., "USD")
    pub quote: String,
}

impl CryptoPair {
    /// Creates a pair, normalizing both symbols to upper case.
    pub fn new(base: impl AsRef<str>, quote: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim().to_uppercase(),
            quote: quote.as_ref().trim().to_uppercase(),
        }
    }

    /// The pair priced by the investment form.
    pub fn eth_usd() -> Self {
        Self::new("ETH", "USD")
    }

    /// Rejects pairs with an empty side.
    pub fn validate(&self) -> Result<(), MarketDataError> {
        if self.base.is_empty() || self.quote.is_empty() {
            return Err(MarketDataError::InvalidPair(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for CryptoPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
