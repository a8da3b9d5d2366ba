//! AI gateway error types.

use thiserror::Error;

/// Wait suggested for a 429 that carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Errors that can occur when talking to the AI gateway or reading its output.
#[derive(Debug, Error)]
pub enum AiError {
    /// Gateway URL or API key missing.
    #[error("AI configuration is not set")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned a non-success status code.
    #[error("AI API error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The gateway returned a 429 Too Many Requests response.
    #[error("AI gateway rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The reply had no `choices[0].message.content`.
    #[error("AI response contained no message content")]
    EmptyResponse,

    /// An image request came back without an image.
    #[error("No image generated in response")]
    NoImage,

    /// Model output could not be read as the expected JSON.
    #[error("{context}: {detail}")]
    Parse {
        /// What was being parsed, e.g. `Failed to parse questions response`.
        context: String,
        /// Underlying parser message.
        detail: String,
    },
}

impl AiError {
    /// Error for a non-success gateway reply. A 429 becomes
    /// [`Self::RateLimited`]; anything else carries its status and body.
    #[must_use]
    pub fn from_refusal(status: u16, retry_after: Option<&str>, body: String) -> Self {
        if status == 429 {
            let retry_after_secs = retry_after
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return Self::RateLimited { retry_after_secs };
        }
        Self::Api {
            status,
            message: body,
        }
    }

    /// Whether the failure happened before any bytes reached the gateway or
    /// while reading them back (as opposed to the gateway answering badly).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
