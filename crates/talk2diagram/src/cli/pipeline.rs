//! One-shot pipeline commands.

use std::path::Path;
use talk2diagram::{
    AppConfig, ConversationTurn, HealthResponse, RenderError, RenderErrorKind,
    RenderOrchestrator, ScriptGenerator, Talk2DiagramResult,
};

/// Generate a script for `message` and print it.
pub async fn handle_generate(config: &AppConfig, message: &str) -> Talk2DiagramResult<()> {
    let generator = ScriptGenerator::new(config.backend.clone())?;
    let history = vec![ConversationTurn::user(message)];

    let script = generator.try_generate_script(message, &history).await?;
    println!("{script}");

    Ok(())
}

/// Render the script at `path` and print where the video was written.
pub async fn handle_render(config: &AppConfig, path: &Path) -> Talk2DiagramResult<()> {
    let source = tokio::fs::read_to_string(path).await.map_err(|e| {
        RenderError::new(RenderErrorKind::Workspace(format!("{}: {}", path.display(), e)))
    })?;

    let renderer = RenderOrchestrator::new(config.renderer.clone())?;
    let video = renderer.try_render(&source).await?;
    println!("{}", video.display());

    Ok(())
}

/// Print service availability as JSON.
pub async fn handle_health(config: &AppConfig) -> Talk2DiagramResult<()> {
    let generator = ScriptGenerator::new(config.backend.clone())?;
    let renderer = RenderOrchestrator::new(config.renderer.clone())?;

    let (backend_available, renderer_installed) = tokio::join!(
        generator.check_backend_available(),
        renderer.check_renderer_installed()
    );
    let health = HealthResponse::from_checks(backend_available, renderer_installed);

    match serde_json::to_string_pretty(&health) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{health:?}"),
    }

    Ok(())
}

/// Remove every temporary job directory.
pub async fn handle_cleanup(config: &AppConfig) -> Talk2DiagramResult<()> {
    let renderer = RenderOrchestrator::new(config.renderer.clone())?;
    renderer.try_cleanup().await?;
    println!("Removed temporary files under {}", renderer.temp_root().display());

    Ok(())
}
