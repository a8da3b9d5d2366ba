//! Extraction of JSON payloads from free-form model text.
//!
//! Models are told to answer with bare JSON but regularly wrap it in a
//! markdown fence. Parsing tries the whole reply first and falls back to the
//! body of the first ```` ```json ```` block.

use serde::de::DeserializeOwned;

use crate::error::AiError;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Parse `raw` as `T`, falling back to a fenced ```` ```json ```` block.
///
/// `context` names what is being parsed and becomes the error message,
/// e.g. `"Failed to parse questions response"`.
///
/// # Errors
///
/// Returns [`AiError::Parse`] if neither the whole text nor a fenced block
/// decodes as `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str, context: &str) -> Result<T, AiError> {
    let trimmed = raw.trim();
    let direct = match serde_json::from_str(trimmed) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match fenced_json(trimmed) {
        Some(body) => serde_json::from_str(body).map_err(|e| AiError::Parse {
            context: context.to_string(),
            detail: format!("fenced block: {e}"),
        }),
        None => Err(AiError::Parse {
            context: context.to_string(),
            detail: direct.to_string(),
        }),
    }
}

/// Body of the first ```` ```json ```` fenced block, trimmed.
#[must_use]
pub fn fenced_json(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(FENCE_CLOSE)?;
    Some(rest[..end].trim())
}
