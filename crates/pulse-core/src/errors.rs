//! Cross-cutting error types for ConceptPulse.
//!
//! Domain-specific errors (`AiError`, `StoreError`, `FunctionError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised by the core types themselves.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known enum variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
