//! Mock AI gateway and in-memory datastore shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use pulse_config::{AiConfig, PulseConfig};
use pulse_functions::FunctionContext;
use pulse_store::{MemoryBackend, PulseStore};
use serde_json::{Value, json};

/// Scripted gateway: answers requests in order and records them.
#[derive(Clone, Default)]
pub struct MockGateway {
    replies: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl MockGateway {
    pub fn reply(&self, status: StatusCode, body: Value) -> &Self {
        self.replies.lock().unwrap().push_back((status, body));
        self
    }

    pub fn text(&self, content: &str) -> &Self {
        self.reply(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": content}}]}),
        )
    }

    pub fn image(&self, url: &str) -> &Self {
        self.reply(
            StatusCode::OK,
            json!({"choices": [{"message": {
                "content": "",
                "images": [{"type": "image_url", "image_url": {"url": url}}]
            }}]}),
        )
    }

    pub fn recorded(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn answer(State(mock): State<MockGateway>, Json(body): Json<Value>) -> Response {
    mock.requests.lock().unwrap().push(body);
    let next = mock.replies.lock().unwrap().pop_front();
    match next {
        Some((status, reply)) => (status, Json(reply)).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "no scripted reply").into_response(),
    }
}

/// Start the mock gateway and return it with its chat-completions URL.
pub async fn spawn_gateway() -> (MockGateway, String) {
    let mock = MockGateway::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(answer))
        .with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (mock, format!("http://{addr}/v1/chat/completions"))
}

pub struct Harness {
    pub ctx: FunctionContext,
    pub gateway: MockGateway,
    pub memory: Arc<MemoryBackend>,
}

/// A context over a seeded in-memory store and a fresh mock gateway.
pub async fn harness(seed: Value) -> Harness {
    let (gateway, url) = spawn_gateway().await;
    let config = PulseConfig {
        ai: AiConfig {
            gateway_url: url,
            api_key: "sk-test".into(),
            ..AiConfig::default()
        },
        ..PulseConfig::default()
    };
    let memory = Arc::new(MemoryBackend::from_seed(seed).unwrap());
    let store = PulseStore::in_memory(Arc::clone(&memory));
    Harness {
        ctx: FunctionContext::with_store(&config, Some(store)),
        gateway,
        memory,
    }
}

/// One user, one topic with two questions and three attempts, one weak spot.
pub fn classroom() -> Value {
    json!({
        "profiles": [{"id": "u1", "name": "Asha", "school": "Springfield High", "class_year": "Grade 11"}],
        "topics": [
            {"id": "t1", "user_id": "u1", "name": "Optics", "subject": "Physics", "subtopics": ["Lenses", "Refraction"]},
            {"id": "t2", "user_id": "u1", "name": "Empty topic"}
        ],
        "questions": [
            {"id": "q1", "user_id": "u1", "topic_id": "t1", "question_text": "Define focal length"},
            {"id": "q2", "user_id": "u1", "topic_id": "t1", "question_text": "State Snell's law"}
        ],
        "attempts": [
            {"id": "a1", "user_id": "u1", "question_id": "q1", "is_correct": true, "time_taken": 20, "confidence": 4,
             "attempted_at": "2026-03-01T10:00:00Z"},
            {"id": "a2", "user_id": "u1", "question_id": "q2", "is_correct": false, "time_taken": 40,
             "attempted_at": "2026-03-01T10:05:00Z"},
            {"id": "a3", "user_id": "u1", "question_id": "q2", "is_correct": true,
             "attempted_at": "2026-03-01T10:09:00Z"}
        ],
        "weak_spots": [
            {"id": "w1", "user_id": "u1", "topic_id": "t1", "concept": "Refraction", "severity": "high"}
        ],
        "mastery_tracking": [
            {"user_id": "u1", "topic_id": "t1", "mastery_score": 45}
        ]
    })
}
