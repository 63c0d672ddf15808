//! Router and handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use talk2diagram_core::{ConversationTurn, ServerConfig};
use talk2diagram_error::{ServerError, ServerErrorKind};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use crate::models::SUCCESS_TURN;
use crate::{
    AppState, DEFAULT_SESSION_ID, GenerateRequest, GenerateResponse, HealthResponse,
    MessageResponse, publish_video, video_url,
};

/// Why a generation request failed.
///
/// The display text is what the client sees in `error` and what is recorded
/// in the session.
#[derive(Debug, derive_more::Display)]
pub enum GenerateError {
    /// Generator returned no usable script
    #[display("Failed to generate Manim script")]
    Script,
    /// Orchestrator produced no video
    #[display("Failed to render video")]
    Render,
    /// Video could not be moved into the media directory
    #[display("{}", _0)]
    Publish(ServerError),
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GenerateResponse::failure(self.to_string())),
        )
            .into_response()
    }
}

/// Build the CORS layer allowing the configured origins.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Configuration`] for an origin that is not a
/// valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                ServerError::new(ServerErrorKind::Configuration(format!(
                    "Invalid CORS origin '{origin}': {e}"
                )))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Create the application router.
///
/// # Errors
///
/// Returns error if the CORS configuration is invalid.
pub fn create_router(state: AppState) -> Result<Router, ServerError> {
    let cors = build_cors_layer(&state.config)?;
    let media = ServeDir::new(&state.config.media_dir);

    Ok(Router::new()
        .route("/", get(root))
        .route("/api/generate", post(generate))
        .route("/api/health", get(health))
        .route("/api/sessions", delete(clear_all_sessions))
        .route("/api/sessions/:session_id", delete(clear_session))
        .route("/api/admin/cleanup", post(cleanup))
        .nest_service("/media", media)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Talk2Diagram API is running"))
}

/// Generate a script, render it and publish the video.
#[instrument(skip(state, request), fields(session_id = tracing::field::Empty, message_length = request.message.len()))]
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, GenerateError> {
    let session_id = request
        .session_id
        .as_deref()
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string();
    tracing::Span::current().record("session_id", session_id.as_str());

    state
        .sessions
        .append(&session_id, ConversationTurn::user(&request.message).stamped_now());
    let recent = state
        .sessions
        .recent(&session_id, state.config.history_window);

    info!(message = %request.message, "Generating animation");

    match run_pipeline(&state, &request.message, &recent).await {
        Ok(url) => {
            state
                .sessions
                .append(&session_id, ConversationTurn::assistant(SUCCESS_TURN).stamped_now());
            Ok(Json(GenerateResponse::success(url)))
        }
        Err(e) => {
            error!(error = %e, "Error generating animation");
            state.sessions.append(
                &session_id,
                ConversationTurn::assistant(format!("Sorry, I encountered an error: {e}"))
                    .stamped_now(),
            );
            Err(e)
        }
    }
}

async fn run_pipeline(
    state: &AppState,
    message: &str,
    recent: &[ConversationTurn],
) -> Result<String, GenerateError> {
    let script = state
        .generator
        .generate_script(message, recent)
        .await
        .ok_or(GenerateError::Script)?;

    info!("Rendering video with Manim");
    let video = state
        .renderer
        .render(&script)
        .await
        .ok_or(GenerateError::Render)?;

    let published = publish_video(&video, &state.config.media_dir)
        .await
        .map_err(GenerateError::Publish)?;

    let file_name = published
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(video_url(&state.config.public_base_url, &file_name))
}

/// Report backend and renderer availability; both checks run concurrently.
#[instrument(skip(state))]
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (backend_available, renderer_installed) = tokio::join!(
        state.generator.check_backend_available(),
        state.renderer.check_renderer_installed()
    );

    let health = HealthResponse::from_checks(backend_available, renderer_installed);
    info!(status = %health.status, "Health check");
    Json(health)
}

#[instrument(skip(state))]
async fn clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<MessageResponse> {
    let existed = state.sessions.clear(&session_id);
    info!(existed, "Session cleared");
    Json(MessageResponse::new("Session cleared"))
}

#[instrument(skip(state))]
async fn clear_all_sessions(State(state): State<AppState>) -> Json<MessageResponse> {
    let sessions = state.sessions.session_count();
    state.sessions.clear_all();
    info!(sessions, "All sessions cleared");
    Json(MessageResponse::new("All sessions cleared"))
}

#[instrument(skip(state))]
async fn cleanup(State(state): State<AppState>) -> Json<MessageResponse> {
    state.renderer.cleanup().await;
    Json(MessageResponse::new("Temporary render files removed"))
}
