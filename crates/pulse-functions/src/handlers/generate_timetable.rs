//! `generate-timetable`: a weekly study plan built from weak spots and mastery.

use std::collections::HashSet;

use serde::Deserialize;

use pulse_ai::{AiError, ChatRequest, GatewayClient, parse_json, prompts};
use pulse_core::entities::TimetableSlot;
use pulse_core::responses::TimetableResponse;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    pub user_id: String,
}

/// Generate and store the user's timetable.
///
/// If the gateway answers with an error status or unusable content, the
/// fixed weekday schedule is stored instead. Transport failures still fail
/// the request.
///
/// # Errors
///
/// Fails on datastore errors, missing gateway configuration, or transport
/// failures.
pub async fn run(ctx: &FunctionContext, req: TimetableRequest) -> Result<TimetableResponse, FunctionError> {
    let store = ctx.store()?;
    let user_id = req.user_id.as_str();
    let weak_spots = store.weak_spots_for_user(user_id).await?;
    let mastery = store.mastery_for_user(user_id).await?;
    let profile = store.get_profile(user_id).await?;
    let topics = store.topics_for_user(user_id).await?;
    let gateway = ctx.gateway()?;

    let request = ChatRequest::new(&ctx.models().timetable)
        .system(prompts::SCHEDULER_SYSTEM_PROMPT)
        .user(prompts::timetable(profile.as_ref(), &weak_spots, &mastery));

    let mut slots = match request_slots(gateway, &request).await {
        Ok(slots) => slots,
        Err(err) if !err.is_transport() => {
            tracing::warn!(error = %err, user_id, "timetable generation failed, using fallback");
            TimetableSlot::fallback_week()
        }
        Err(err) => return Err(err.into()),
    };

    let known: HashSet<&str> = topics.iter().map(|t| t.id.as_str()).collect();
    for slot in &mut slots {
        if slot
            .topic_id
            .as_deref()
            .is_some_and(|id| !known.contains(id))
        {
            slot.topic_id = None;
        }
    }

    let schedule = store.replace_timetable(user_id, slots).await?;
    tracing::info!(user_id, slots = schedule.len(), "timetable generated");
    Ok(TimetableResponse {
        success: true,
        schedule,
    })
}

async fn request_slots(
    gateway: &GatewayClient,
    request: &ChatRequest,
) -> Result<Vec<TimetableSlot>, AiError> {
    let raw = gateway.complete_text(request).await?;
    parse_json(&raw, "Failed to parse AI timetable")
}
