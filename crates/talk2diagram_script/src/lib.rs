//! Manim script generation for Talk2Diagram.
//!
//! Turns a user request plus recent conversation history into Manim Community
//! Edition source code by prompting an Ollama-compatible backend, then cleans
//! up and sanity-checks whatever text the model returns.
//!
//! # Example
//!
//! ```no_run
//! use talk2diagram_core::{BackendConfig, ConversationTurn};
//! use talk2diagram_script::ScriptGenerator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ScriptGenerator::new(BackendConfig::default())?;
//!
//! if generator.check_backend_available().await {
//!     let history = vec![ConversationTurn::user("Show a sine wave being traced")];
//!     if let Some(script) = generator
//!         .generate_script("Show a sine wave being traced", &history)
//!         .await
//!     {
//!         println!("{script}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod prompt;
mod sanitize;
mod validate;
mod wire;

pub use generator::ScriptGenerator;
pub use prompt::{NO_HISTORY_PLACEHOLDER, build_prompt, format_history};
pub use sanitize::sanitize_script;
pub use talk2diagram_error::{GeneratorError, GeneratorErrorKind, GeneratorResult};
pub use validate::{REQUIRED_ELEMENTS, validate_script};
pub use wire::{
    GenerationOptions, GenerationRequest, GenerationRequestBuilder, GenerationResponse,
    ModelEntry, TagsResponse,
};
