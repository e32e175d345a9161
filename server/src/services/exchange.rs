//! Client for the awesomeapi currency exchange API.
//!
//! One GET per call, no retries, no fallback endpoint. The whole round trip
//! runs under a fixed deadline; expiry drops the in-flight request.

use std::time::Duration;

use shared::models::{CurrencyQuote, QuoteEnvelope};
use tokio::time::timeout;

use crate::error::FetchError;

/// Budget for the external round trip, measured from call start.
pub const FETCH_DEADLINE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct ExchangeApiClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ExchangeApiClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the latest USD-BRL quote and unwrap it from its envelope.
    pub async fn fetch_latest(&self) -> Result<CurrencyQuote, FetchError> {
        timeout(FETCH_DEADLINE, self.fetch_inner())
            .await
            .map_err(|_| FetchError::DeadlineExceeded)?
    }

    async fn fetch_inner(&self) -> Result<CurrencyQuote, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Read as text first so transport and decode failures stay distinct.
        let body = response.text().await?;
        let envelope: QuoteEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.usdbrl)
    }
}
