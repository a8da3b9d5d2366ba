//! `generate-mindmap`: a detailed mind-map image for a concept.

use serde::Deserialize;
use serde_json::Value;

use pulse_ai::prompts;
use pulse_core::responses::MindmapResponse;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
pub struct MindmapRequest {
    pub concept: String,
    /// Free text, though callers sometimes send structured notes.
    #[serde(default)]
    pub details: Value,
}

impl MindmapRequest {
    fn details_text(&self) -> String {
        match &self.details {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// # Errors
///
/// Fails if the gateway call fails or no image comes back.
pub async fn run(ctx: &FunctionContext, req: MindmapRequest) -> Result<MindmapResponse, FunctionError> {
    tracing::info!(concept = %req.concept, "generating mind map");
    let prompt = prompts::mindmap_detailed(&req.concept, &req.details_text());
    let image_url = ctx
        .gateway()?
        .generate_image(&ctx.models().image, &prompt)
        .await?;
    Ok(MindmapResponse { image_url })
}
