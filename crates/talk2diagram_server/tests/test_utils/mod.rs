//! Test harness running the full service against stand-in dependencies.
//!
//! The text-generation backend is an in-process axum app and the renderer is
//! a shell script, so these tests only run on Unix.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Arc;
use talk2diagram_core::{BackendConfig, RendererConfig, ServerConfig};
use talk2diagram_render::RenderOrchestrator;
use talk2diagram_script::ScriptGenerator;
use talk2diagram_server::{AppState, create_router};
use tempfile::TempDir;

pub const MODEL: &str = "deepseek-coder-v2:latest";

pub const VALID_SCRIPT: &str = "from manim import *\n\nclass CircleDemo(Scene):\n    def construct(self):\n        self.play(Create(Circle()))\n        self.wait(0.5)";

/// Behaves like `manim -qm --disable_caching --format=mp4 <script> <scene>`.
pub const FAKE_RENDERER: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Manim Community v0.18.1"
  exit 0
fi
stem=$(basename "$4" .py)
out="media/videos/$stem/720p30"
mkdir -p "$out"
printf 'not really a video' > "$out/$5.mp4"
"#;

pub const FAILING_RENDERER: &str = "#!/bin/sh\necho 'boom' >&2\nexit 1\n";

struct Backend {
    models: Vec<String>,
    reply: String,
}

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_backend(models: &[&str], reply: &str) -> String {
    let backend = Arc::new(Backend {
        models: models.iter().map(|m| m.to_string()).collect(),
        reply: reply.to_string(),
    });

    let router = Router::new()
        .route("/api/tags", get(tags))
        .route("/api/generate", post(generate))
        .with_state(backend);

    spawn(router).await
}

async fn tags(State(backend): State<Arc<Backend>>) -> Json<Value> {
    let models: Vec<Value> = backend.models.iter().map(|m| json!({"name": m})).collect();
    Json(json!({ "models": models }))
}

async fn generate(State(backend): State<Arc<Backend>>, Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "response": backend.reply, "done": true }))
}

/// A running service plus handles to inspect it.
pub struct TestApp {
    pub base_url: String,
    pub state: AppState,
    pub dir: TempDir,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Service whose backend lists `models`, replies `reply` and renders with `renderer`.
    pub async fn start(models: &[&str], reply: &str, renderer: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();

        let backend_url = start_backend(models, reply).await;
        let generator = ScriptGenerator::new(BackendConfig {
            base_url: backend_url,
            model: MODEL.to_string(),
            request_timeout_secs: 5,
            probe_timeout_secs: 2,
            ..BackendConfig::default()
        })
        .unwrap();

        let program = write_renderer(&dir, renderer);
        let orchestrator = RenderOrchestrator::new(RendererConfig {
            program,
            temp_root: Some(dir.path().join("jobs")),
            render_timeout_secs: 10,
            version_timeout_secs: 5,
        })
        .unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let media_dir = dir.path().join("media");
        std::fs::create_dir_all(&media_dir).unwrap();
        let config = ServerConfig {
            bind: "127.0.0.1:0".to_string(),
            media_dir,
            public_base_url: base_url.clone(),
            history_window: 6,
            ..ServerConfig::default()
        };

        let state = AppState::new(generator, orchestrator, config);
        let router = create_router(state.clone()).unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            state,
            dir,
            client: reqwest::Client::new(),
        }
    }

    /// Fully working service.
    pub async fn healthy() -> Self {
        Self::start(&[MODEL], VALID_SCRIPT, FAKE_RENDERER).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn media_dir(&self) -> PathBuf {
        self.dir.path().join("media")
    }

    pub fn temp_root(&self) -> PathBuf {
        self.dir.path().join("jobs")
    }

    /// POST `/api/generate` and return the status and JSON body.
    pub async fn generate(&self, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

fn write_renderer(dir: &TempDir, body: &str) -> PathBuf {
    let bin = dir.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let path = bin.join("manim");
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
