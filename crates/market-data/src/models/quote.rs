use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Spot quote for a pair
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Time the quote was received
    pub timestamp: DateTime<Utc>,

    /// Spot price of one unit of the base asset
    pub price: Decimal,

    /// Quote currency
    pub currency: String,

    /// Source of the quote (COINGECKO, COINBASE, etc.)
    pub source: String,
}

impl Quote {
    /// Create a quote stamped with the current time
    pub fn new(price: Decimal, currency: String, source: String) -> Self {
        Self {
            timestamp: Utc::now(),
            price,
            currency,
            source,
        }
    }

    /// Ensures the quoted price is strictly positive.
    pub fn validate(&self) -> Result<(), MarketDataError> {
        if self.price <= Decimal::ZERO {
            return Err(MarketDataError::ValidationFailed {
                message: format!("{} returned non-positive price {}", self.source, self.price),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_positive_price() {
        let quote = Quote::new(dec!(3421.55), "USD".to_string(), "COINGECKO".to_string());
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        for price in [dec!(0), dec!(-1.5)] {
            let quote = Quote::new(price, "USD".to_string(), "COINBASE".to_string());
            assert!(matches!(
                quote.validate(),
                Err(MarketDataError::ValidationFailed { .. })
            ));
        }
    }
}
