//! Top-level error wrapper types.

use crate::{ConfigError, GeneratorError, RenderError, ServerError};

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use talk2diagram_error::{ConfigError, Talk2DiagramError};
///
/// let err: Talk2DiagramError = ConfigError::new("bad bind address").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Talk2DiagramErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Script generator error
    #[from(GeneratorError)]
    Generator(GeneratorError),
    /// Render orchestrator error
    #[from(RenderError)]
    Render(RenderError),
    /// HTTP service error
    #[from(ServerError)]
    Server(ServerError),
}

/// Talk2Diagram error with kind discrimination.
///
/// # Examples
///
/// ```
/// use talk2diagram_error::{ConfigError, Talk2DiagramResult};
///
/// fn might_fail() -> Talk2DiagramResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Talk2Diagram Error: {}", _0)]
pub struct Talk2DiagramError(Box<Talk2DiagramErrorKind>);

impl Talk2DiagramError {
    /// Create a new error from a kind.
    pub fn new(kind: Talk2DiagramErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &Talk2DiagramErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to Talk2DiagramErrorKind
impl<T> From<T> for Talk2DiagramError
where
    T: Into<Talk2DiagramErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Talk2Diagram operations.
pub type Talk2DiagramResult<T> = std::result::Result<T, Talk2DiagramError>;
