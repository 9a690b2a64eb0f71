use dotenv::dotenv;
use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_EXCHANGE_RATE_API_URL: &str = "https://open.er-api.com/v6/latest";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub exchange_rate_api_url: String,
    pub exchange_rate_api_timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let exchange_rate_api_timeout = match get("EXCHANGE_RATE_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: "EXCHANGE_RATE_API_TIMEOUT_SECS",
                        expected: "number of seconds",
                        value: raw.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    expected: "port number",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            exchange_rate_api_url: get("EXCHANGE_RATE_API_URL")
                .unwrap_or_else(|| DEFAULT_EXCHANGE_RATE_API_URL.to_string()),
            exchange_rate_api_timeout,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
