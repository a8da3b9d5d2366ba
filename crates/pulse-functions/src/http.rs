//! HTTP surface: `POST /functions/v1/{name}` plus preflight and health.
//!
//! Every response carries the permissive CORS headers the browser client
//! expects. Handler failures become `500 {"error": message}`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::context::FunctionContext;
use crate::error::FunctionError;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Build the router over a shared context.
pub fn router(ctx: Arc<FunctionContext>) -> Router {
    Router::new()
        .route("/functions/v1/{name}", post(invoke).options(preflight))
        .route("/health", get(health).options(preflight))
        .fallback(fallback)
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn invoke(
    State(ctx): State<Arc<FunctionContext>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, FunctionError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| FunctionError::InvalidBody(e.to_string()))?;
    crate::invoke(&ctx, &name, body).await.map(Json)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
