//! Talk2Diagram CLI binary.
//!
//! This binary provides command-line access to Talk2Diagram's functionality:
//! - Serve the HTTP API used by the web front-end
//! - Generate or render a single scene
//! - Check backend and renderer availability

use clap::Parser;
use talk2diagram::AppConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_cleanup, handle_generate, handle_health, handle_render,
        handle_serve,
    };

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    #[cfg(feature = "observability")]
    let provider = talk2diagram::observability::init_observability(
        talk2diagram::observability::ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;
    #[cfg(not(feature = "observability"))]
    talk2diagram::init_tracing(log_level, cli.json_logs)?;

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };
    tracing::debug!(?config, "Configuration loaded");

    // Execute the requested command
    let result = match cli.command {
        Commands::Serve { bind } => handle_serve(config, bind).await,
        Commands::Generate { message } => handle_generate(&config, &message).await,
        Commands::Render { script } => handle_render(&config, &script).await,
        Commands::Health => handle_health(&config).await,
        Commands::Cleanup => handle_cleanup(&config).await,
    };

    #[cfg(feature = "observability")]
    talk2diagram::observability::shutdown_observability(provider);

    result?;
    Ok(())
}
