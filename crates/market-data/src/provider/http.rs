use reqwest::{Client, StatusCode};

use crate::errors::MarketDataError;

/// Performs a GET and returns the body of a successful response.
///
/// 429 maps to `RateLimited`, any other non-2xx status to `ProviderError`.
pub(crate) async fn fetch_text(
    client: &Client,
    provider: &str,
    url: &str,
) -> Result<String, MarketDataError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| MarketDataError::from_request(provider, e))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: provider.to_string(),
        });
    }
    if !status.is_success() {
        return Err(MarketDataError::provider(provider, format!("HTTP {}", status)));
    }

    response
        .text()
        .await
        .map_err(|e| MarketDataError::from_request(provider, e))
}
