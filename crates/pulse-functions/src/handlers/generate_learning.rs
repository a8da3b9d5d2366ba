//! `generate-learning`: four text explanations and a mind map for a weak spot.

use serde::Deserialize;

use pulse_ai::{ChatRequest, prompts};
use pulse_core::entities::LearningContent;
use pulse_core::enums::LearningFormat;

use crate::context::FunctionContext;
use crate::error::FunctionError;

const CONTENT_MAX_TOKENS: u32 = 2500;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRequest {
    pub weak_spot_id: String,
}

/// Generate every format sequentially and replace the stored content.
///
/// # Errors
///
/// Fails if the weak spot is missing, a text completion fails, or the write
/// fails. A failed mind-map image falls back to a placeholder.
pub async fn run(ctx: &FunctionContext, req: LearningRequest) -> Result<LearningContent, FunctionError> {
    let store = ctx.store()?;
    let weak_spot = store.get_weak_spot(&req.weak_spot_id).await?;
    let gateway = ctx.gateway()?;
    let concept = weak_spot.concept.as_str();

    let mut content = LearningContent::default();
    for format in LearningFormat::TEXT_FORMATS {
        let request = ChatRequest::new(&ctx.models().content)
            .system(prompts::EDUCATOR_SYSTEM_PROMPT)
            .user(prompts::learning_format(format, concept))
            .max_completion_tokens(CONTENT_MAX_TOKENS);
        let text = gateway.complete_text(&request).await?;
        tracing::debug!(%format, chars = text.len(), "generated learning format");
        content.set(format, text);
    }

    content.mindmap = match gateway
        .generate_image(&ctx.models().image, &prompts::mindmap_image(concept))
        .await
    {
        Ok(url) => mindmap_image_tag(&url, concept),
        Err(err) => {
            tracing::warn!(error = %err, concept, "mind map image unavailable, using placeholder");
            mindmap_placeholder(concept)
        }
    };

    store
        .replace_learning_content(
            &weak_spot.id,
            &content.to_rows(&weak_spot.user_id, &weak_spot.id),
        )
        .await?;
    tracing::info!(concept, "learning content generated");
    Ok(content)
}

fn mindmap_image_tag(url: &str, concept: &str) -> String {
    format!(
        r#"<img src="{}" alt="Mind map for {}" style="max-width: 100%; border-radius: 8px;" />"#,
        escape_html(url),
        escape_html(concept)
    )
}

fn mindmap_placeholder(concept: &str) -> String {
    format!(
        r#"<div style="padding: 40px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 12px; color: white; text-align: center;"><h3>{}</h3><p>Visual mind map</p></div>"#,
        escape_html(concept)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
