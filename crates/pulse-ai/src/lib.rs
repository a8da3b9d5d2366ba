//! # pulse-ai
//!
//! Client for the OpenAI-compatible AI gateway, plus the prompt templates
//! and the response parser the functions share.
//!
//! - [`GatewayClient`]: bearer-authenticated chat completions and image generation
//! - [`prompts`]: fixed natural-language templates
//! - [`parse`]: JSON extraction with a markdown-fence fallback

pub mod parse;
pub mod prompts;
pub mod types;

mod error;

pub use error::AiError;
pub use parse::parse_json;
pub use types::{ChatMessage, ChatRequest, ChatResponse};

use std::time::Duration;

use pulse_config::AiConfig;

/// HTTP client for the AI gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GatewayClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::NotConfigured`] if the gateway URL or API key is
    /// missing, or [`AiError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.is_configured() {
            return Err(AiError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("conceptpulse/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Send a chat-completions request and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails, the gateway returns a
    /// non-success status, or the body is not a chat-completions response.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AiError> {
        tracing::debug!(model = %request.model, messages = request.messages.len(), "sending chat completion");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let retry_after = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(model = %request.model, status = status.as_u16(), "gateway refused request");
        Err(AiError::from_refusal(status.as_u16(), retry_after.as_deref(), body))
    }

    /// Send a request and return `choices[0].message.content`.
    ///
    /// # Errors
    ///
    /// As [`Self::complete`], plus [`AiError::EmptyResponse`] if the reply has no content.
    pub async fn complete_text(&self, request: &ChatRequest) -> Result<String, AiError> {
        let response = self.complete(request).await?;
        response
            .text()
            .map(ToString::to_string)
            .ok_or(AiError::EmptyResponse)
    }

    /// Ask an image model for a picture and return its URL (often a data URL).
    ///
    /// # Errors
    ///
    /// As [`Self::complete`], plus [`AiError::NoImage`] if the reply has no image.
    pub async fn generate_image(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        let request = ChatRequest::new(model).user(prompt).with_image_output();
        let response = self.complete(&request).await?;
        response
            .image_url()
            .map(ToString::to_string)
            .ok_or(AiError::NoImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_gateway_is_rejected() {
        let err = GatewayClient::from_config(&AiConfig::default()).unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
        assert_eq!(err.to_string(), "AI configuration is not set");
    }

    #[test]
    fn configured_gateway_builds() {
        let config = AiConfig {
            gateway_url: "http://127.0.0.1:9/v1/chat/completions".into(),
            api_key: "sk-test".into(),
            ..Default::default()
        };
        assert!(GatewayClient::from_config(&config).is_ok());
    }
}
