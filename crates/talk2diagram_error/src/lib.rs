//! Error types for the Talk2Diagram pipeline.
//!
//! This crate provides the foundation error types used throughout the workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The script generator and render orchestrator convert these errors into
//! `None`/`false` at their outward boundary; the typed forms are what gets
//! logged and what the `try_*` operations hand back.
//!
//! # Examples
//!
//! ```
//! use talk2diagram_error::{RenderError, RenderErrorKind, Talk2DiagramResult};
//!
//! fn render() -> Talk2DiagramResult<String> {
//!     Err(RenderError::new(RenderErrorKind::EntryPointNotFound))?
//! }
//!
//! match render() {
//!     Ok(path) => println!("Rendered: {}", path),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod render;
mod server;

pub use config::ConfigError;
pub use error::{Talk2DiagramError, Talk2DiagramErrorKind, Talk2DiagramResult};
pub use generator::{GeneratorError, GeneratorErrorKind, GeneratorResult};
pub use render::{RenderError, RenderErrorKind, RenderResult, stderr_tail};
pub use server::{ServerError, ServerErrorKind};
