//! `analyze-weakspots`: turn a topic's attempts into weak spots and a mastery score.

use chrono::Utc;
use serde::Deserialize;

use pulse_ai::{ChatRequest, parse_json, prompts};
use pulse_core::aggregate::{AttemptSummary, summarize};
use pulse_core::entities::{Attempt, MasteryRecord, NewWeakSpot};
use pulse_core::responses::WeakSpotReport;

use crate::context::FunctionContext;
use crate::error::FunctionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub topic_id: String,
}

/// Analyze the topic. A topic without attempts gets the "not enough data"
/// report and nothing is written.
///
/// # Errors
///
/// Fails if the topic is missing, the gateway call fails, the reply is not
/// a report, or a write fails.
pub async fn run(ctx: &FunctionContext, req: AnalyzeRequest) -> Result<WeakSpotReport, FunctionError> {
    let store = ctx.store()?;
    let topic = store.get_topic(&req.topic_id).await?;
    let attempts = store.attempts_for_topic(&topic.id).await?;

    let plain: Vec<Attempt> = attempts.iter().map(|a| a.attempt.clone()).collect();
    let stats = match summarize(&plain) {
        AttemptSummary::NotEnoughData => {
            tracing::info!(topic_id = %topic.id, "no attempts, skipping analysis");
            return Ok(WeakSpotReport::not_enough_data());
        }
        AttemptSummary::Stats(stats) => stats,
    };
    tracing::info!(
        topic_id = %topic.id,
        total = stats.total,
        accuracy = stats.accuracy,
        "analyzing attempts"
    );

    let request = ChatRequest::new(&ctx.models().analysis)
        .system(prompts::ANALYST_SYSTEM_PROMPT)
        .user(prompts::weak_spot_analysis(&topic.name, &stats, &attempts));
    let raw = ctx.gateway()?.complete_text(&request).await?;
    let mut report: WeakSpotReport = parse_json(&raw, "Failed to parse weak spot analysis")?;
    report.mastery_score = report.mastery_score.clamp(0.0, 100.0);

    let spots: Vec<NewWeakSpot> = report
        .weak_spots
        .iter()
        .map(|finding| NewWeakSpot {
            user_id: topic.user_id.clone(),
            topic_id: topic.id.clone(),
            concept: finding.concept.clone(),
            severity: finding.severity,
        })
        .collect();
    store.replace_weak_spots(&topic.id, &spots).await?;

    store
        .upsert_mastery(&MasteryRecord {
            user_id: topic.user_id.clone(),
            topic_id: topic.id.clone(),
            mastery_score: report.mastery_score,
            accuracy: Some(i64::from(stats.accuracy)),
            avg_time: Some(stats.avg_time_rounded()),
            last_practiced: Some(Utc::now()),
        })
        .await?;

    tracing::info!(topic_id = %topic.id, weak_spots = spots.len(), "analysis stored");
    Ok(report)
}
