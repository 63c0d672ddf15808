//! Ollama-backed script generator.

use crate::wire::{GenerationRequestBuilder, GenerationResponse, TagsResponse};
use crate::{build_prompt, sanitize_script, validate_script};
use talk2diagram_core::{BackendConfig, ConversationTurn};
use talk2diagram_error::{GeneratorError, GeneratorErrorKind, GeneratorResult};
use tracing::{debug, error, info, instrument, warn};

/// Generates Manim scripts by prompting a text-generation backend.
///
/// Holds only configuration and a pooled HTTP client, so a single instance
/// can be shared across tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    /// Backend settings
    config: BackendConfig,

    /// HTTP client with the generation timeout applied
    client: reqwest::Client,
}

impl ScriptGenerator {
    /// Create a generator for the given backend.
    #[instrument(name = "script_generator_new", skip(config), fields(url = %config.base_url, model = %config.model))]
    pub fn new(config: BackendConfig) -> GeneratorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                GeneratorError::new(GeneratorErrorKind::InvalidConfiguration(e.to_string()))
            })?;

        info!("Creating script generator");

        Ok(Self { config, client })
    }

    /// Backend settings in use.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Check that the backend is reachable and lists the configured model.
    ///
    /// Never fails: every problem is logged and reported as `false`.
    pub async fn check_backend_available(&self) -> bool {
        match self.probe().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Text-generation backend unavailable");
                false
            }
        }
    }

    /// Like [`check_backend_available`](Self::check_backend_available), but reports why.
    #[instrument(skip(self), fields(model = %self.config.model))]
    pub async fn probe(&self) -> GeneratorResult<()> {
        let url = self.config.endpoint("/api/tags");
        debug!(url = %url, "Listing backend models");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.probe_timeout())
            .send()
            .await
            .map_err(|e| GeneratorError::new(GeneratorErrorKind::BackendUnreachable(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::new(GeneratorErrorKind::BackendStatus(
                status.as_u16(),
            )));
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            GeneratorError::new(GeneratorErrorKind::MalformedResponse(e.to_string()))
        })?;

        debug!(count = tags.models.len(), "Found backend models");

        if !tags.contains(&self.config.model) {
            warn!(
                model = %self.config.model,
                available = ?tags.names(),
                "Model not found on backend"
            );
            return Err(GeneratorError::new(GeneratorErrorKind::ModelMissing(
                self.config.model.clone(),
            )));
        }

        Ok(())
    }

    /// Generate a validated Manim script, or `None` if anything goes wrong.
    ///
    /// `history` must already end with the turn carrying `user_text`.
    pub async fn generate_script(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> Option<String> {
        match self.try_generate_script(user_text, history).await {
            Ok(script) => Some(script),
            Err(e) => {
                error!(error = %e, "Error generating script");
                None
            }
        }
    }

    /// Generate a validated Manim script, reporting the failure cause.
    #[instrument(skip(self, user_text, history), fields(model = %self.config.model, turns = history.len()))]
    pub async fn try_generate_script(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> GeneratorResult<String> {
        let prompt = build_prompt(user_text, history);
        debug!(prompt_length = prompt.len(), "Built prompt");

        let request = GenerationRequestBuilder::default()
            .model(self.config.model.clone())
            .prompt(prompt)
            .stream(false)
            .options(&self.config.sampling)
            .build()
            .map_err(|e| {
                GeneratorError::new(GeneratorErrorKind::InvalidConfiguration(e.to_string()))
            })?;

        let response = self
            .client
            .post(self.config.endpoint("/api/generate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::new(GeneratorErrorKind::BackendUnreachable(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Backend API error");
            return Err(GeneratorError::new(GeneratorErrorKind::BackendStatus(
                status.as_u16(),
            )));
        }

        let body: GenerationResponse = response.json().await.map_err(|e| {
            GeneratorError::new(GeneratorErrorKind::MalformedResponse(e.to_string()))
        })?;

        debug!(response_length = body.response.len(), "Received backend response");

        let script = sanitize_script(&body.response);
        if !validate_script(&script) {
            return Err(GeneratorError::new(GeneratorErrorKind::InvalidScript));
        }

        info!(script_length = script.len(), "Generated valid Manim script");
        Ok(script)
    }
}
