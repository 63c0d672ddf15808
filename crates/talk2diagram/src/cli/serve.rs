//! `serve` command handler.

use talk2diagram::{AppConfig, AppState, Talk2DiagramResult, serve};
use tracing::{info, warn};

/// Run the HTTP API until interrupted.
pub async fn handle_serve(mut config: AppConfig, bind: Option<String>) -> Talk2DiagramResult<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    let state = AppState::from_config(&config)?;

    let (backend_available, renderer_installed) = tokio::join!(
        state.generator.check_backend_available(),
        state.renderer.check_renderer_installed()
    );
    if !backend_available {
        warn!(url = %config.backend.base_url, model = %config.backend.model, "Backend not ready; generation requests will fail");
    }
    if !renderer_installed {
        warn!(program = %config.renderer.program.display(), "Renderer not found; render requests will fail");
    }

    info!("Talk2Diagram API starting. Press Ctrl+C to stop.");
    serve(state, &config.server.bind).await?;

    Ok(())
}
