//! Core data types for Talk2Diagram.
//!
//! This crate provides the conversation model shared by the script generator
//! and the HTTP service, the layered application configuration, and tracing
//! setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod conversation;
mod telemetry;

pub use config::{AppConfig, BackendConfig, RendererConfig, SamplingConfig, ServerConfig};
pub use conversation::{ConversationTurn, Sender};
pub use telemetry::init_tracing;
