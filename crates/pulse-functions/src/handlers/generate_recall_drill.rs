//! `generate-recall-drill`: three quick active-recall questions.

use serde::Deserialize;
use serde_json::Value;

use pulse_ai::{ChatRequest, parse_json, prompts};
use pulse_core::responses::RecallDrill;

use crate::context::FunctionContext;
use crate::error::FunctionError;

const RECALL_MAX_TOKENS: u32 = 800;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallRequest {
    pub concept: String,
    #[serde(default)]
    pub learning_content: Value,
}

/// # Errors
///
/// Fails if the gateway call fails or the reply is not a drill.
pub async fn run(ctx: &FunctionContext, req: RecallRequest) -> Result<RecallDrill, FunctionError> {
    let request = ChatRequest::new(&ctx.models().recall)
        .system(prompts::RECALL_SYSTEM_PROMPT)
        .user(prompts::recall_drill(&req.concept, &req.learning_content))
        .max_completion_tokens(RECALL_MAX_TOKENS);
    let raw = ctx.gateway()?.complete_text(&request).await?;
    let drill: RecallDrill = parse_json(&raw, "Failed to parse recall drill response")?;
    tracing::info!(concept = %req.concept, questions = drill.questions.len(), "recall drill generated");
    Ok(drill)
}
