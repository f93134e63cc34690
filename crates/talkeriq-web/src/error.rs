//! HTTP mapping for failures surfaced by handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by request handlers
#[derive(Error, Debug)]
pub enum WebError {
    /// Failure from the core crate
    #[error(transparent)]
    Core(#[from] talkeriq_core::Error),

    /// Query string failed validation
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] validator::ValidationErrors),
}

/// JSON body sent with an error status
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable message
    pub error: String,
    /// Stable machine readable code
    pub code: &'static str,
}

impl WebError {
    /// Status code and error code for this failure
    #[must_use]
    pub const fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidQuery(_) | Self::Core(talkeriq_core::Error::Validation { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST")
            }
            Self::Core(talkeriq_core::Error::Authentication(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            Self::Core(talkeriq_core::Error::Timeout { .. }) => {
                (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT")
            }
            Self::Core(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        if status.is_server_error() {
            error!(error = %self, code, "Request failed");
        } else {
            warn!(error = %self, code, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}
