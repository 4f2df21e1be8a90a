//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `ETHFOLIO_PRICE_PROVIDERS` | `coingecko,coinbase` |
//! | `ETHFOLIO_COINGECKO_URL` | public CoinGecko API |
//! | `ETHFOLIO_COINBASE_URL` | public Coinbase API |
//! | `ETHFOLIO_PRICE_TIMEOUT_SECS` | `30` |
//! | `ETHFOLIO_LOGIN_PATH` | `/login` |
//!
//! `ETHFOLIO_PRICE_PROVIDERS` lists the enabled providers in the order they
//! are tried.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{DEFAULT_LOGIN_PATH, DEFAULT_PRICE_TIMEOUT_SECS};
use ethfolio_market_data::provider::{coinbase, coingecko};

pub const ENV_PRICE_PROVIDERS: &str = "ETHFOLIO_PRICE_PROVIDERS";
pub const ENV_COINGECKO_URL: &str = "ETHFOLIO_COINGECKO_URL";
pub const ENV_COINBASE_URL: &str = "ETHFOLIO_COINBASE_URL";
pub const ENV_PRICE_TIMEOUT_SECS: &str = "ETHFOLIO_PRICE_TIMEOUT_SECS";
pub const ENV_LOGIN_PATH: &str = "ETHFOLIO_LOGIN_PATH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    fn invalid(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Price sources that can be enabled through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceProviderKind {
    CoinGecko,
    Coinbase,
}

impl FromStr for PriceProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coingecko" => Ok(Self::CoinGecko),
            "coinbase" => Ok(Self::Coinbase),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub price_providers: Vec<PriceProviderKind>,
    pub coingecko_url: String,
    pub coinbase_url: String,
    pub price_timeout: Duration,
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_providers: vec![PriceProviderKind::CoinGecko, PriceProviderKind::Coinbase],
            coingecko_url: coingecko::DEFAULT_BASE_URL.to_string(),
            coinbase_url: coinbase::DEFAULT_BASE_URL.to_string(),
            price_timeout: Duration::from_secs(DEFAULT_PRICE_TIMEOUT_SECS),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Unset or blank keys
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_PRICE_PROVIDERS) {
            config.price_providers = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.parse::<PriceProviderKind>()
                        .map_err(|_| ConfigError::invalid(ENV_PRICE_PROVIDERS, s.trim()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if config.price_providers.is_empty() {
                return Err(ConfigError::invalid(ENV_PRICE_PROVIDERS, &raw));
            }
        }

        if let Some(url) = get(ENV_COINGECKO_URL) {
            config.coingecko_url = url;
        }
        if let Some(url) = get(ENV_COINBASE_URL) {
            config.coinbase_url = url;
        }

        if let Some(raw) = get(ENV_PRICE_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::invalid(ENV_PRICE_TIMEOUT_SECS, &raw))?;
            config.price_timeout = Duration::from_secs(secs);
        }

        if let Some(path) = get(ENV_LOGIN_PATH) {
            if !path.starts_with('/') {
                return Err(ConfigError::invalid(ENV_LOGIN_PATH, &path));
            }
            config.login_path = path;
        }

        Ok(config)
    }
}
