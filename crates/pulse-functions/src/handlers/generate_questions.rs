//! `generate-questions`: diagnostic questions for a topic.

use serde::Deserialize;

use pulse_ai::{ChatRequest, parse_json, prompts};
use pulse_core::entities::{GeneratedQuestion, NewQuestion};
use pulse_core::responses::QuestionsResponse;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub topic_id: String,
}

/// Generate questions and add them to the topic's stored set.
///
/// # Errors
///
/// Fails if the topic is missing, the gateway call fails, the reply is not
/// a question array, or the write fails.
pub async fn run(ctx: &FunctionContext, req: QuestionsRequest) -> Result<QuestionsResponse, FunctionError> {
    let store = ctx.store()?;
    let topic = store.get_topic(&req.topic_id).await?;

    let request = ChatRequest::new(&ctx.models().questions).user(prompts::question_generation(&topic));
    let raw = ctx.gateway()?.complete_text(&request).await?;
    let generated: Vec<GeneratedQuestion> = parse_json(&raw, "Failed to parse questions response")?;
    tracing::info!(topic_id = %topic.id, count = generated.len(), "generated questions");

    let rows: Vec<NewQuestion> = generated
        .into_iter()
        .map(|question| NewQuestion {
            user_id: topic.user_id.clone(),
            topic_id: topic.id.clone(),
            question,
        })
        .collect();
    let questions = store.insert_questions(&rows).await?;
    Ok(QuestionsResponse { questions })
}
