//! Provider registry with priority ordering and failover.

mod provider_registry;

pub use provider_registry::ProviderRegistry;
