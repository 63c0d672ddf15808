//! Script generator errors.

/// Failure conditions when talking to the text-generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeneratorErrorKind {
    /// Backend could not be reached (connection refused, DNS, timeout)
    #[display("Backend unreachable: {}", _0)]
    BackendUnreachable(String),

    /// Backend answered with a non-success status code
    #[display("Backend returned status {}", _0)]
    BackendStatus(u16),

    /// Backend is up but does not list the configured model
    #[display("Model not found: {}", _0)]
    ModelMissing(String),

    /// Backend body could not be decoded
    #[display("Malformed backend response: {}", _0)]
    MalformedResponse(String),

    /// Generated text failed structural validation
    #[display("Generated script failed validation")]
    InvalidScript,

    /// HTTP client or request could not be constructed
    #[display("Invalid generator configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Script generator error with location tracking.
///
/// # Examples
///
/// ```
/// use talk2diagram_error::{GeneratorError, GeneratorErrorKind};
///
/// let err = GeneratorError::new(GeneratorErrorKind::BackendStatus(500));
/// assert!(format!("{}", err).contains("status 500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generator Error: {} at {}:{}", kind, file, line)]
pub struct GeneratorError {
    /// The specific error kind
    pub kind: GeneratorErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GeneratorError {
    /// Create a new generator error.
    #[track_caller]
    pub fn new(kind: GeneratorErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for script generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
