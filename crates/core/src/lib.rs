//! Ethfolio Core - ETH investment entries, price lookups, and access control.
//!
//! This crate holds the application logic behind the investment entry form
//! and the access guard. Price data comes from the `market-data` crate;
//! presentation layers plug in through the `Notifier`, `InvestmentSink`
//! and `Navigator` traits.

pub mod auth;
pub mod config;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod notifications;
pub mod prices;
pub mod utils;

pub use config::Config;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
