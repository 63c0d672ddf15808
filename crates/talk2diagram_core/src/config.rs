//! Application configuration.
//!
//! Configuration is layered with the `config` crate:
//! - Bundled defaults (include_str! from talk2diagram.toml)
//! - User overrides (~/.config/talk2diagram/talk2diagram.toml, then ./talk2diagram.toml)
//! - Environment variables prefixed with `TALK2DIAGRAM__`
//!
//! Later layers take precedence over earlier ones.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use talk2diagram_error::{ConfigError, Talk2DiagramError, Talk2DiagramResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../talk2diagram.toml");

/// Directory name under the system temp dir used when `temp_root` is unset.
const DEFAULT_TEMP_DIR_NAME: &str = "talk2diagram";

/// Sampling parameters forwarded to the text-generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Randomness of generation; kept low for code
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Context window in tokens
    pub num_ctx: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.9,
            num_ctx: 4096,
        }
    }
}

/// Connection settings for the Ollama-compatible backend.
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "http://localhost:11434"
/// model = "deepseek-coder-v2:latest"
/// request_timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend, without trailing slash
    pub base_url: String,
    /// Model that must be listed by the backend and is used for generation
    pub model: String,
    /// Upper bound on a single generation request
    pub request_timeout_secs: u64,
    /// Upper bound on the connectivity probe
    pub probe_timeout_secs: u64,
    /// Sampling options
    pub sampling: SamplingConfig,
}

impl BackendConfig {
    /// Generation request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connectivity probe timeout.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "deepseek-coder-v2:latest".to_string(),
            request_timeout_secs: 120,
            probe_timeout_secs: 5,
            sampling: SamplingConfig::default(),
        }
    }
}

/// Settings for the external rendering tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Rendering executable, looked up on `PATH` unless absolute
    pub program: PathBuf,
    /// Root under which per-job directories are created
    pub temp_root: Option<PathBuf>,
    /// Upper bound on a single render
    pub render_timeout_secs: u64,
    /// Upper bound on the `--version` probe
    pub version_timeout_secs: u64,
}

impl RendererConfig {
    /// Render timeout.
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Installation probe timeout.
    pub fn version_timeout(&self) -> Duration {
        Duration::from_secs(self.version_timeout_secs)
    }

    /// Temp root, falling back to `<system temp>/talk2diagram`.
    pub fn resolved_temp_root(&self) -> PathBuf {
        self.temp_root
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_TEMP_DIR_NAME))
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("manim"),
            temp_root: None,
            render_timeout_secs: 300,
            version_timeout_secs: 10,
        }
    }
}

/// Settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,
    /// Directory published videos are moved into and served from
    pub media_dir: PathBuf,
    /// Prefix for video URLs handed back to clients
    pub public_base_url: String,
    /// Number of most recent turns passed to the generator
    pub history_window: usize,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            media_dir: PathBuf::from("media"),
            public_base_url: "http://localhost:8000".to_string(),
            history_window: 6,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// Complete application configuration.
///
/// # Example
///
/// ```no_run
/// use talk2diagram_core::AppConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::load()?;
/// println!("Using model {}", config.backend.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text-generation backend
    pub backend: BackendConfig,
    /// Rendering tool
    pub renderer: RendererConfig,
    /// HTTP service
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    #[instrument]
    pub fn load() -> Talk2DiagramResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::bundled_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/talk2diagram/talk2diagram.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("talk2diagram").required(false));

        Self::finish(builder.add_source(Self::environment()))
    }

    /// Load configuration from one explicit file layered over the bundled defaults.
    ///
    /// Environment overrides still apply on top.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Talk2DiagramResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::bundled_builder()
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(Self::environment());

        Self::finish(builder)
    }

    /// Parse configuration from a TOML string layered over the bundled defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use talk2diagram_core::AppConfig;
    ///
    /// let config = AppConfig::from_toml_str("[backend]\nmodel = \"codellama\"").unwrap();
    /// assert_eq!(config.backend.model, "codellama");
    /// assert_eq!(config.server.history_window, 6);
    /// ```
    pub fn from_toml_str(toml: &str) -> Talk2DiagramResult<Self> {
        Self::finish(
            Self::bundled_builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    fn bundled_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn environment() -> Environment {
        Environment::with_prefix("TALK2DIAGRAM")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Talk2DiagramResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                Talk2DiagramError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                Talk2DiagramError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Talk2DiagramResult<()> {
        if self.backend.model.trim().is_empty() {
            Err(ConfigError::new("backend.model must not be empty"))?;
        }
        if self.server.history_window == 0 {
            Err(ConfigError::new("server.history_window must be at least 1"))?;
        }
        if self.backend.request_timeout_secs == 0 || self.renderer.render_timeout_secs == 0 {
            Err(ConfigError::new("timeouts must be at least one second"))?;
        }
        Ok(())
    }
}
