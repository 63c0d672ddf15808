//! Shared handler state.

use std::sync::Arc;
use talk2diagram_core::{AppConfig, ServerConfig};
use talk2diagram_error::{ServerError, ServerErrorKind, Talk2DiagramResult};
use talk2diagram_render::RenderOrchestrator;
use talk2diagram_script::ScriptGenerator;
use tracing::info;

use crate::SessionStore;

/// State handed to every handler via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or is already a handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Script generator
    pub generator: Arc<ScriptGenerator>,
    /// Render orchestrator
    pub renderer: Arc<RenderOrchestrator>,
    /// Conversation sessions
    pub sessions: SessionStore,
    /// Server settings
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from already-built components.
    pub fn new(
        generator: ScriptGenerator,
        renderer: RenderOrchestrator,
        config: ServerConfig,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            renderer: Arc::new(renderer),
            sessions: SessionStore::new(),
            config: Arc::new(config),
        }
    }

    /// Build every component from configuration and create the media directory.
    ///
    /// # Errors
    ///
    /// Returns error if a component cannot be created or the media directory
    /// cannot be made.
    pub fn from_config(config: &AppConfig) -> Talk2DiagramResult<Self> {
        let generator = ScriptGenerator::new(config.backend.clone())?;
        let renderer = RenderOrchestrator::new(config.renderer.clone())?;

        std::fs::create_dir_all(&config.server.media_dir).map_err(|e| {
            ServerError::new(ServerErrorKind::Configuration(format!(
                "media_dir {}: {}",
                config.server.media_dir.display(),
                e
            )))
        })?;

        info!(media_dir = %config.server.media_dir.display(), "Application state ready");

        Ok(Self::new(generator, renderer, config.server.clone()))
    }
}
