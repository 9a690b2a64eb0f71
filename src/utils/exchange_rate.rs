use crate::{errors::ConversionError, models::RatesResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the exchange rate provider.
///
/// Holds configuration only. Every call builds its own `reqwest::Client`,
/// which is dropped when the call returns, on success and on error alike.
#[derive(Debug, Clone)]
pub struct ExchangeRateApi {
    base_url: String,
    timeout: Option<Duration>,
}

impl ExchangeRateApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn build_client(&self) -> Result<Client, ConversionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    // Fetch the latest rate table for `base_currency`
    pub async fn fetch_rates(&self, base_currency: &str) -> Result<RatesResponse, ConversionError> {
        let client = self.build_client()?;
        let url = format!("{}/{}", self.base_url, base_currency);
        debug!(%url, "Fetching exchange rates");

        let response = client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let rates: RatesResponse = serde_json::from_str(&body)?;

        Ok(rates)
    }
}
