//! AI gateway configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    120
}

/// Model identifiers used by each function, as understood by the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
    /// Weak-spot analysis.
    pub analysis: String,
    /// Long-form learning content.
    pub content: String,
    /// Diagnostic question generation.
    pub questions: String,
    /// Weekly timetable generation.
    pub timetable: String,
    /// Mind-map image generation.
    pub image: String,
    /// OCR and topic extraction (text and vision).
    pub vision: String,
    /// Active-recall drills.
    pub recall: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            analysis: "openai/gpt-5-mini".into(),
            content: "openai/gpt-5".into(),
            questions: "google/gemini-2.5-flash".into(),
            timetable: "openai/gpt-5-mini".into(),
            image: "google/gemini-2.5-flash-image".into(),
            vision: "google/gemini-2.5-flash".into(),
            recall: "openai/gpt-5".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AiConfig {
    /// Chat-completions endpoint of the gateway.
    #[serde(default)]
    pub gateway_url: String,

    /// Bearer token sent to the gateway.
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub models: ModelConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gateway_url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            models: ModelConfig::default(),
        }
    }
}

impl AiConfig {
    /// Check if the gateway URL and key are both present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.gateway_url.is_empty() && !self.api_key.is_empty()
    }

    /// Reject URLs the HTTP client could never reach.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `gateway_url` is set but is
    /// not an `http(s)` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gateway_url.is_empty()
            && !(self.gateway_url.starts_with("http://") || self.gateway_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "ai.gateway_url".into(),
                reason: "must start with http:// or https://".into(),
            });
        }
        Ok(())
    }
}
