//! Investment domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::InvestmentError;

/// Direction of an entry. Withdrawals carry negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentType {
    #[default]
    Deposit,
    Withdrawal,
}

impl InvestmentType {
    /// +1 for deposits, -1 for withdrawals.
    pub fn sign(&self) -> Decimal {
        match self {
            InvestmentType::Deposit => Decimal::ONE,
            InvestmentType::Withdrawal => Decimal::NEGATIVE_ONE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Deposit => "deposit",
            InvestmentType::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(InvestmentType::Deposit),
            "withdrawal" => Ok(InvestmentType::Withdrawal),
            other => Err(format!("Unknown investment type '{}'", other)),
        }
    }
}

/// A single deposit or withdrawal, with the ETH price at entry time.
///
/// `amount` and `eth_amount` always share the sign given by
/// `investment_type`, and `eth_amount == amount / eth_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    #[serde(with = "day_format")]
    pub date: NaiveDate,
    /// Signed USD amount
    pub amount: Decimal,
    /// USD per ETH
    pub eth_price: Decimal,
    /// Signed ETH amount
    pub eth_amount: Decimal,
    #[serde(rename = "type", default)]
    pub investment_type: InvestmentType,
}

impl Investment {
    /// Builds a record from positive magnitudes, applying the sign of
    /// `investment_type` to both the USD and ETH amounts.
    pub fn from_entry(
        id: String,
        date: NaiveDate,
        amount: Decimal,
        eth_price: Decimal,
        investment_type: InvestmentType,
    ) -> Result<Self, InvestmentError> {
        if amount <= Decimal::ZERO || eth_price <= Decimal::ZERO {
            return Err(InvestmentError::NonPositive);
        }

        // A quotient that rounds to zero would lose the sign
        let eth_amount = amount
            .checked_div(eth_price)
            .filter(|eth| !eth.is_zero())
            .ok_or(InvestmentError::InvalidNumber)?;
        let sign = investment_type.sign();

        Ok(Self {
            id,
            date,
            amount: amount * sign,
            eth_price,
            eth_amount: eth_amount * sign,
            investment_type,
        })
    }

    pub fn is_withdrawal(&self) -> bool {
        self.investment_type == InvestmentType::Withdrawal
    }

    /// Unsigned USD amount, as typed into the form.
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }
}

/// Totals over a set of investments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub count: usize,
    pub total_deposited: Decimal,
    /// Positive magnitude of all withdrawals
    pub total_withdrawn: Decimal,
    pub net_usd: Decimal,
    pub net_eth: Decimal,
    /// `net_usd / net_eth`, only while ETH is still held
    pub average_eth_price: Option<Decimal>,
}

impl InvestmentSummary {
    pub fn from_investments<'a>(investments: impl IntoIterator<Item = &'a Investment>) -> Self {
        let mut summary = Self::default();

        for investment in investments {
            summary.count += 1;
            if investment.is_withdrawal() {
                summary.total_withdrawn += investment.magnitude();
            } else {
                summary.total_deposited += investment.magnitude();
            }
            summary.net_usd += investment.amount;
            summary.net_eth += investment.eth_amount;
        }

        summary.average_eth_price = if summary.net_eth > Decimal::ZERO {
            summary.net_usd.checked_div(summary.net_eth)
        } else {
            None
        };

        summary
    }
}

/// New random record id.
pub fn generate_investment_id() -> String {
    Uuid::new_v4().to_string()
}

/// Largest number of significant fractional digits a `Decimal` holds.
const MAX_INPUT_SCALE: usize = 28;

/// Parses user-typed numbers: plain decimals or scientific notation.
///
/// Digit separators are rejected, as is any input that cannot be
/// represented without rounding away fractional digits.
pub fn parse_decimal_input(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.contains('_') || fraction_digits(value) > MAX_INPUT_SCALE {
        return None;
    }

    let parsed = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()?;

    // Scientific input can still underflow to zero
    let mantissa = value.split(['e', 'E']).next().unwrap_or_default();
    if parsed.is_zero() && mantissa.chars().any(|c| matches!(c, '1'..='9')) {
        return None;
    }

    Some(parsed)
}

/// Significant digits after the decimal point, ignoring trailing zeros.
fn fraction_digits(value: &str) -> usize {
    value
        .split_once('.')
        .map(|(_, fraction)| {
            let digits: String = fraction.chars().take_while(char::is_ascii_digit).collect();
            digits.trim_end_matches('0').len()
        })
        .unwrap_or(0)
}

/// Serializes dates as `YYYY-MM-DD`; accepts plain dates or RFC 3339
/// timestamps when reading.
mod day_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::utils::time_utils::{format_day, parse_day_lenient};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_day(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_day_lenient(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid date '{}'", s)))
    }
}
