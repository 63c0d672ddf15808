//! Render orchestrator errors.

/// Lines of renderer stderr kept in a [`RenderErrorKind::NonZeroExit`] message.
const STDERR_TAIL_LINES: usize = 5;

/// Upper bound on the bytes of stderr kept in a message.
const STDERR_TAIL_BYTES: usize = 2048;

/// Kinds of render failures.
///
/// Every terminal failure of a render job maps onto exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// Rendering binary could not be spawned
    #[display("Renderer not installed: {}", _0)]
    RendererMissing(String),

    /// Job directory or source file could not be prepared
    #[display("Failed to prepare render workspace: {}", _0)]
    Workspace(String),

    /// No scene class could be found in the source
    #[display("Could not extract scene name from script")]
    EntryPointNotFound,

    /// Renderer exited with a non-zero status
    ///
    /// Displays only the end of stderr; the full text stays in the field.
    #[display("Renderer exited with code {}: {}", code, stderr_tail(stderr))]
    NonZeroExit {
        /// Process exit code (`-1` if killed by signal)
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// Renderer exceeded its time budget and was killed
    #[display("Renderer timed out after {}ms", elapsed_ms)]
    Timeout {
        /// Elapsed wall-clock time before the process was killed
        elapsed_ms: u64,
    },

    /// I/O failure while talking to the child process
    #[display("Renderer I/O error: {}", _0)]
    Process(String),

    /// Renderer succeeded but no video was found at the expected location
    #[display("No video file generated in {}", _0)]
    ArtifactNotFound(String),

    /// Temporary root could not be reset
    #[display("Failed to clean temporary files: {}", _0)]
    Cleanup(String),
}

/// Last few lines of `stderr`, where Python puts the exception.
///
/// # Examples
///
/// ```
/// use talk2diagram_error::stderr_tail;
///
/// assert_eq!(stderr_tail("a\nb\nc\nd\ne\nf\ng\n"), "c\nd\ne\nf\ng");
/// assert_eq!(stderr_tail("only line"), "only line");
/// ```
pub fn stderr_tail(stderr: &str) -> &str {
    let trimmed = stderr.trim_end();
    let tail = match trimmed.rmatch_indices('\n').nth(STDERR_TAIL_LINES - 1) {
        Some((idx, _)) => &trimmed[idx + 1..],
        None => trimmed,
    };

    let mut start = tail.len().saturating_sub(STDERR_TAIL_BYTES);
    while !tail.is_char_boundary(start) {
        start += 1;
    }
    &tail[start..]
}

/// Render error with location tracking.
///
/// # Examples
///
/// ```
/// use talk2diagram_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::Timeout { elapsed_ms: 300_000 });
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the failure was the renderer running out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, RenderErrorKind::Timeout { .. })
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
