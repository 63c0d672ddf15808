//! Request and response bodies.

use serde::{Deserialize, Serialize};
use talk2diagram_core::ConversationTurn;

/// Assistant turn recorded after a successful generation.
pub(crate) const SUCCESS_TURN: &str =
    "Animation generated successfully! Here's your visualization.";

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// What the user wants animated
    pub message: String,
    /// Client-side history; accepted but the server session is authoritative
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    /// Session to continue; defaults to the shared session
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Reply to `POST /api/generate`, for success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Human-readable outcome
    pub message: String,
    /// Where the rendered video can be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Title shown above the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Failure detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Successful generation pointing at `video_url`.
    pub fn success(video_url: impl Into<String>) -> Self {
        Self {
            message: "Animation generated successfully!".to_string(),
            video_url: Some(video_url.into()),
            title: Some("Generated Animation".to_string()),
            error: None,
        }
    }

    /// Failed generation carrying `detail`.
    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            message: "Failed to generate animation".to_string(),
            video_url: None,
            title: None,
            error: Some(detail.into()),
        }
    }
}

/// Availability of the external services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `connected` or `disconnected`
    pub ollama: String,
    /// `installed` or `not_installed`
    pub manim: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` when every service is available
    pub status: String,
    /// Per-service detail
    pub services: ServiceStatus,
}

impl HealthResponse {
    /// Build from the two availability checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use talk2diagram_server::HealthResponse;
    ///
    /// let health = HealthResponse::from_checks(true, false);
    /// assert_eq!(health.status, "unhealthy");
    /// assert_eq!(health.services.ollama, "connected");
    /// assert_eq!(health.services.manim, "not_installed");
    /// ```
    pub fn from_checks(backend_available: bool, renderer_installed: bool) -> Self {
        let status = if backend_available && renderer_installed {
            "healthy"
        } else {
            "unhealthy"
        };

        Self {
            status: status.to_string(),
            services: ServiceStatus {
                ollama: if backend_available { "connected" } else { "disconnected" }.to_string(),
                manim: if renderer_installed { "installed" } else { "not_installed" }.to_string(),
            },
        }
    }

    /// True when both services are available.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Plain `{"message": ...}` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Reply text
    pub message: String,
}

impl MessageResponse {
    /// Wrap `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
