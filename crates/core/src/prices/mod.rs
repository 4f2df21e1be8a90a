//! Prices module - the ETH/USD spot price used by entry forms.

mod price_service;
mod price_traits;

pub use price_service::PriceService;
pub use price_traits::PriceServiceTrait;
