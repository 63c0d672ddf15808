//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Talk2Diagram - turn natural-language requests into Manim animations
#[derive(Parser, Debug)]
#[command(name = "talk2diagram")]
#[command(about = "Turn natural-language requests into Manim animations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate a Manim script and print it
    Generate {
        /// What to animate
        message: String,
    },

    /// Render a Manim script file and print the video path
    Render {
        /// Path to the script
        script: PathBuf,
    },

    /// Report backend and renderer availability
    Health,

    /// Remove all temporary render directories
    Cleanup,
}
