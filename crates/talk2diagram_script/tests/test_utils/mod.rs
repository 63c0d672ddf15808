//! Test utilities for script generator tests.
//!
//! Provides an in-process stand-in for the Ollama HTTP API.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use talk2diagram_core::BackendConfig;

/// Valid script the mock hands back by default.
#[allow(dead_code)]
pub const VALID_SCRIPT: &str = "from manim import *\n\nclass CircleDemo(Scene):\n    def construct(self):\n        self.play(Create(Circle()))\n        self.wait(0.5)";

/// How the mock answers `POST /api/generate`.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// 200 with `{"response": <text>}`
    Reply(String),
    /// Given status with an error body
    Status(u16),
    /// Sleep before replying with a valid script
    Delay(Duration),
    /// 200 with a body that is not JSON
    Garbage,
}

#[derive(Debug)]
struct MockState {
    models: Vec<String>,
    behavior: MockBehavior,
    last_request: Mutex<Option<Value>>,
}

/// Running mock backend.
pub struct MockOllama {
    base_url: String,
    state: Arc<MockState>,
}

impl MockOllama {
    /// Start a mock listing `models` and answering generation with `behavior`.
    pub async fn start(models: &[&str], behavior: MockBehavior) -> Self {
        let state = Arc::new(MockState {
            models: models.iter().map(|m| m.to_string()).collect(),
            behavior,
            last_request: Mutex::new(None),
        });

        let router = Router::new()
            .route("/api/tags", get(tags))
            .route("/api/generate", post(generate))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Backend config pointing at this mock.
    pub fn config(&self, model: &str) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            model: model.to_string(),
            request_timeout_secs: 5,
            probe_timeout_secs: 2,
            ..BackendConfig::default()
        }
    }

    /// Last JSON body received on `/api/generate`.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

async fn tags(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let models: Vec<Value> = state
        .models
        .iter()
        .map(|name| json!({"name": name, "size": 1024}))
        .collect();
    Json(json!({ "models": models }))
}

async fn generate(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    *state.last_request.lock().unwrap() = Some(body);

    match &state.behavior {
        MockBehavior::Reply(text) => {
            Json(json!({"model": "mock", "response": text, "done": true})).into_response()
        }
        MockBehavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            Json(json!({"error": "model failed"})),
        )
            .into_response(),
        MockBehavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(json!({"response": VALID_SCRIPT})).into_response()
        }
        MockBehavior::Garbage => (StatusCode::OK, "not json").into_response(),
    }
}
