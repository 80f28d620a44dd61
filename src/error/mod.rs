//! Centralized API error handling for the insights gateway
//!
//! Every failed upstream call surfaces to the dashboard as HTTP 500 with a
//! flat `{"error": <message>}` body carrying a fixed, per-route message.
//! The underlying cause is logged server-side only and never leaks to the
//! caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// An upstream analytics call failed. `message` is the static text shown
    /// to the caller; `source` is the real cause, kept for the server log.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Wrap an upstream failure with the fixed message for its route
    pub fn upstream(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Upstream { message, source }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Upstream { message, source } => {
                tracing::error!(error = %source, "{}", message);
                json!({ "error": message })
            }
        };

        (status, Json(body)).into_response()
    }
}
