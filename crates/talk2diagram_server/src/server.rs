//! Server loop.

use talk2diagram_error::{ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::{AppState, create_router};

/// Bind `bind` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns error if the address cannot be bound, the router cannot be built
/// or the server loop fails.
#[instrument(skip(state))]
pub async fn serve(state: AppState, bind: &str) -> Result<(), ServerError> {
    let router = create_router(state)?;

    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{bind}: {e}"))))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    info!(addr = %local_addr, "Talk2Diagram API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
