//! HTTP service for Talk2Diagram.
//!
//! Exposes the generate-then-render pipeline to a browser front-end:
//!
//! ```text
//! POST /api/generate ──> ScriptGenerator ──> RenderOrchestrator ──> media/<uuid>.mp4
//!                                                                     │
//! GET  /media/<uuid>.mp4 <────────────────────────────────────────────┘
//! ```
//!
//! Conversation history lives in an in-memory [`SessionStore`] and is lost on
//! restart.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod models;
mod routes;
mod server;
mod session;
mod state;

pub use media::{publish_video, video_url};
pub use models::{
    GenerateRequest, GenerateResponse, HealthResponse, MessageResponse, ServiceStatus,
};
pub use routes::{GenerateError, build_cors_layer, create_router};
pub use server::serve;
pub use session::{DEFAULT_SESSION_ID, SessionStore};
pub use state::AppState;
pub use talk2diagram_error::{ServerError, ServerErrorKind};
