//! Talk2Diagram - natural language to Manim animations
//!
//! Talk2Diagram turns a conversational request ("show a sine wave being
//! traced by a rotating vector") into a rendered video. A local LLM served by
//! Ollama writes a Manim scene; the `manim` CLI renders it in an isolated job
//! directory.
//!
//! # Quick Start
//!
//! ```no_run
//! use talk2diagram::{AppConfig, ConversationTurn, RenderOrchestrator, ScriptGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let generator = ScriptGenerator::new(config.backend.clone())?;
//! let renderer = RenderOrchestrator::new(config.renderer.clone())?;
//!
//! let request = "Animate a square morphing into a circle";
//! let history = vec![ConversationTurn::user(request)];
//!
//! if let Some(script) = generator.generate_script(request, &history).await {
//!     if let Some(video) = renderer.render(&script).await {
//!         println!("Video at {}", video.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry (stdout)
//!
//! # Architecture
//!
//! - `talk2diagram_error` - error types
//! - `talk2diagram_core` - conversation model, configuration, tracing setup
//! - `talk2diagram_script` - prompt construction, backend client, script cleanup
//! - `talk2diagram_render` - subprocess orchestration and artifact discovery
//! - `talk2diagram_server` - HTTP service and session store
//!
//! This crate (`talk2diagram`) re-exports everything for convenience.

pub use talk2diagram_core::*;
pub use talk2diagram_error::*;
pub use talk2diagram_render::{
    OUTPUT_TAG, ProcessOutput, RenderJob, RenderOrchestrator, RenderState, SCRIPT_FILENAME,
    VIDEO_EXTENSION, extract_scene_name, locate_video, run_with_timeout, video_dir,
};
pub use talk2diagram_script::{
    GenerationOptions, GenerationRequest, GenerationRequestBuilder, GenerationResponse,
    ModelEntry, NO_HISTORY_PLACEHOLDER, REQUIRED_ELEMENTS, ScriptGenerator, TagsResponse,
    build_prompt, format_history, sanitize_script, validate_script,
};
pub use talk2diagram_server::{
    AppState, DEFAULT_SESSION_ID, GenerateError, GenerateRequest, GenerateResponse,
    HealthResponse, MessageResponse, ServiceStatus, SessionStore, build_cors_layer,
    create_router, publish_video, serve, video_url,
};

// OpenTelemetry bridge
#[cfg(feature = "observability")]
pub mod observability;
