use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use reqwest::Error as ReqwestError;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::ErrorDetail;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid request parameters: {0}")]
    Validation(String),

    #[error("Exchange rate not found for currencies: {from} to {to}")]
    RateNotFound { from: String, to: String },

    #[error("Error requesting external API: {0}")]
    Upstream(#[source] ReqwestError),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<ReqwestError> for ConversionError {
    fn from(err: ReqwestError) -> Self {
        // The provider answered, just not with something usable.
        if err.is_status() || err.is_decode() || err.is_builder() {
            ConversionError::Unexpected(err.to_string())
        } else {
            ConversionError::Upstream(err)
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::Unexpected(format!("invalid provider response: {}", err))
    }
}

impl ResponseError for ConversionError {
    fn status_code(&self) -> StatusCode {
        match self {
            ConversionError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ConversionError::RateNotFound { .. } => StatusCode::NOT_FOUND,
            ConversionError::Upstream(_) | ConversionError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "Conversion failed");
        } else {
            debug!(%status, "Conversion rejected: {}", self);
        }

        HttpResponse::build(status).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}
