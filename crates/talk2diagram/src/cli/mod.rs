//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the talk2diagram binary.

mod commands;
mod pipeline;
mod serve;

pub use commands::{Cli, Commands};
pub use pipeline::{handle_cleanup, handle_generate, handle_health, handle_render};
pub use serve::handle_serve;
