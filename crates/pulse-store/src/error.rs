//! Datastore error types for pulse-store.

use thiserror::Error;

/// Errors from datastore operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Datastore URL or service-role key missing.
    #[error("Datastore configuration is not set")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The REST API returned a non-success status code.
    #[error("Datastore error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A single-row lookup found nothing.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// A row could not be decoded into its entity type.
    #[error("Failed to decode {table} row: {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded as a row.
    #[error("Failed to encode row: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid state encountered (bad seed data, unfiltered delete, etc.).
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
