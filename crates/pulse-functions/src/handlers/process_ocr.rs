//! `process-ocr`: extract text and topics from an uploaded note.

use std::path::Path;

use serde::Deserialize;

use pulse_ai::{ChatMessage, ChatRequest, parse_json, prompts};
use pulse_core::responses::OcrExtraction;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
}

impl OcrRequest {
    fn is_pdf(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

/// PDFs are referenced by URL in the prompt; anything else is sent to the
/// vision model as an image part. Nothing is written.
///
/// # Errors
///
/// Fails if the gateway call fails or the reply is not an extraction.
pub async fn run(ctx: &FunctionContext, req: OcrRequest) -> Result<OcrExtraction, FunctionError> {
    let gateway = ctx.gateway()?;
    let model = &ctx.models().vision;
    let request = if req.is_pdf() {
        tracing::info!(file = %req.file_name, "processing PDF");
        ChatRequest::new(model).user(prompts::ocr_pdf(&req.file_url))
    } else {
        tracing::info!(file = %req.file_name, "processing image");
        ChatRequest::new(model).message(ChatMessage::user_with_image(
            prompts::ocr_image(),
            req.file_url.as_str(),
        ))
    };

    let raw = gateway.complete_text(&request).await?;
    let extraction: OcrExtraction = parse_json(&raw, "Failed to parse AI response as JSON")?;
    tracing::info!(topics = extraction.topics.len(), "topics identified");
    Ok(extraction)
}
