use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConversionQuery {
    #[serde(rename = "from")]
    pub from_currency: String,
    #[serde(rename = "to")]
    pub to_currency: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ConversionResult {
    pub result: f64,
}

/// Payload returned by the rate provider for `GET {base_url}/{base}`.
///
/// Only `rates` is read; everything else the provider sends is ignored.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

impl RatesResponse {
    pub fn rate_for(&self, currency: &str) -> Option<f64> {
        self.rates.as_ref()?.get(currency).copied()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}
