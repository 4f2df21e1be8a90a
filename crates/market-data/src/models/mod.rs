//! Market data models
//!
//! - `pair` - The base/quote pair being priced (CryptoPair)
//! - `quote` - Spot quote returned by providers (Quote)

mod pair;
mod quote;

pub use pair::CryptoPair;
pub use quote::Quote;
