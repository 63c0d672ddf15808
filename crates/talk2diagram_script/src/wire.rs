//! Ollama HTTP API request and response bodies.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use talk2diagram_core::SamplingConfig;

/// Body of `GET /api/tags`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagsResponse {
    /// Locally available models
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl TagsResponse {
    /// True if a model with exactly this name is listed.
    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| m.name == model)
    }

    /// Names of all listed models.
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}

/// One entry of the model list. Other fields reported by the backend are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model name including tag, e.g. `deepseek-coder-v2:latest`
    pub name: String,
}

/// Sampling options sent with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Context window in tokens
    pub num_ctx: u32,
}

impl From<&SamplingConfig> for GenerationOptions {
    fn from(config: &SamplingConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            num_ctx: config.num_ctx,
        }
    }
}

/// Body of `POST /api/generate`.
///
/// # Examples
///
/// ```
/// use talk2diagram_core::SamplingConfig;
/// use talk2diagram_script::GenerationRequestBuilder;
///
/// let request = GenerationRequestBuilder::default()
///     .model("deepseek-coder-v2:latest")
///     .prompt("Draw a circle")
///     .options(&SamplingConfig::default())
///     .build()
///     .unwrap();
///
/// assert!(!request.stream);
/// assert_eq!(request.options.num_ctx, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Model to generate with
    pub model: String,
    /// Complete prompt text
    pub prompt: String,
    /// Streaming is never requested; the whole reply is read at once
    #[builder(default)]
    pub stream: bool,
    /// Sampling options
    pub options: GenerationOptions,
}

/// Body returned by `POST /api/generate` when streaming is off.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text; absent is treated as empty
    #[serde(default)]
    pub response: String,
}
