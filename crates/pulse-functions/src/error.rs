//! Function error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use pulse_ai::AiError;
use pulse_store::StoreError;

/// Errors surfaced by a function invocation.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body was not the JSON object the function expects.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl FunctionError {
    /// Unknown names are 404; every other failure is a generic 500.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnknownFunction(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(error = %message, "function failed");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
