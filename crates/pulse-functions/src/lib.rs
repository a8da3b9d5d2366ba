//! # pulse-functions
//!
//! The ConceptPulse functions: independent handlers that read from the
//! datastore, prompt the AI gateway, and write derived rows back.
//!
//! - [`invoke`]: dispatch a JSON body to a handler by name
//! - [`http::router`]: the `/functions/v1/{name}` HTTP surface with CORS

pub mod context;
pub mod error;
pub mod handlers;
pub mod http;
pub mod name;

pub use context::FunctionContext;
pub use error::FunctionError;
pub use name::FunctionName;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::handlers::{
    analyze_weakspots, generate_learning, generate_mindmap, generate_questions,
    generate_recall_drill, generate_timetable, process_ocr, submit_attempt,
};

/// Run the function called `name` with `body` and return its JSON response.
///
/// # Errors
///
/// Returns [`FunctionError::UnknownFunction`] for an unrecognized name,
/// [`FunctionError::InvalidBody`] if `body` does not fit the function's
/// request, or whatever the handler fails with.
pub async fn invoke(ctx: &FunctionContext, name: &str, body: Value) -> Result<Value, FunctionError> {
    let name: FunctionName = name.parse()?;
    tracing::info!(function = %name, "invoking");
    match name {
        FunctionName::AnalyzeWeakspots => {
            respond(analyze_weakspots::run(ctx, request(body)?).await?)
        }
        FunctionName::GenerateLearning => {
            respond(generate_learning::run(ctx, request(body)?).await?)
        }
        FunctionName::GenerateQuestions => {
            respond(generate_questions::run(ctx, request(body)?).await?)
        }
        FunctionName::GenerateTimetable => {
            respond(generate_timetable::run(ctx, request(body)?).await?)
        }
        FunctionName::ProcessOcr => respond(process_ocr::run(ctx, request(body)?).await?),
        FunctionName::GenerateMindmap => {
            respond(generate_mindmap::run(ctx, request(body)?).await?)
        }
        FunctionName::GenerateRecallDrill => {
            respond(generate_recall_drill::run(ctx, request(body)?).await?)
        }
        FunctionName::SubmitAttempt => respond(submit_attempt::run(ctx, request(body)?).await?),
    }
}

fn request<T: DeserializeOwned>(body: Value) -> Result<T, FunctionError> {
    serde_json::from_value(body).map_err(|e| FunctionError::InvalidBody(e.to_string()))
}

fn respond<T: Serialize>(response: T) -> Result<Value, FunctionError> {
    serde_json::to_value(response).map_err(FunctionError::Encode)
}
