//! Render job lifecycle.

use derive_getters::Getters;
use std::path::{Path, PathBuf};
use talk2diagram_error::{RenderError, RenderErrorKind, RenderResult};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// File name the generated source is written to inside a job directory.
pub const SCRIPT_FILENAME: &str = "scene.py";

/// Where a render job is in its lifecycle.
///
/// `Created → SourceWritten → EntryPointResolved → Running → {Succeeded | Failed | TimedOut}`
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RenderState {
    /// Job directory exists
    #[display("created")]
    Created,
    /// Source file written
    #[display("source-written")]
    SourceWritten,
    /// Scene class name known
    #[display("entry-point-resolved")]
    EntryPointResolved,
    /// Renderer process running
    #[display("subprocess-running")]
    Running,
    /// Video produced at the given path
    #[display("succeeded")]
    Succeeded(PathBuf),
    /// Terminal failure with its cause
    #[display("failed: {}", _0)]
    Failed(String),
    /// Renderer exceeded the timeout
    #[display("timed-out")]
    TimedOut,
}

impl RenderState {
    /// True for states a job never leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_) | Self::TimedOut)
    }
}

/// One render attempt scoped to its own working directory.
#[derive(Debug, Clone, Getters)]
pub struct RenderJob {
    /// Unique job identifier, also the directory name
    id: Uuid,
    /// Isolated working directory
    dir: PathBuf,
    /// Path of the written source file
    script_path: PathBuf,
    /// Scene class to render, once resolved
    scene: Option<String>,
    /// Current lifecycle state
    state: RenderState,
}

impl RenderJob {
    /// Create a fresh job directory under `root`.
    ///
    /// The directory is created with `create_dir` so an existing directory is
    /// an error rather than silently shared between jobs.
    pub async fn create(root: &Path) -> RenderResult<Self> {
        fs::create_dir_all(root).await.map_err(|e| {
            RenderError::new(RenderErrorKind::Workspace(format!(
                "{}: {}",
                root.display(),
                e
            )))
        })?;

        let id = Uuid::new_v4();
        let dir = root.join(id.to_string());
        fs::create_dir(&dir).await.map_err(|e| {
            RenderError::new(RenderErrorKind::Workspace(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let script_path = dir.join(SCRIPT_FILENAME);
        debug!(job_id = %id, dir = %dir.display(), "Render job created");

        Ok(Self {
            id,
            dir,
            script_path,
            scene: None,
            state: RenderState::Created,
        })
    }

    /// Write the source verbatim to the job's script file.
    pub async fn write_source(&mut self, source: &str) -> RenderResult<()> {
        fs::write(&self.script_path, source).await.map_err(|e| {
            RenderError::new(RenderErrorKind::Workspace(format!(
                "{}: {}",
                self.script_path.display(),
                e
            )))
        })?;
        self.transition(RenderState::SourceWritten);
        Ok(())
    }

    /// Record the scene class the renderer will be asked for.
    pub fn resolve_entry_point(&mut self, scene: String) {
        self.scene = Some(scene);
        self.transition(RenderState::EntryPointResolved);
    }

    /// Mark the renderer as started.
    pub fn mark_running(&mut self) {
        self.transition(RenderState::Running);
    }

    /// Record the terminal outcome for `result`.
    pub fn finish(&mut self, result: &RenderResult<PathBuf>) {
        let state = match result {
            Ok(path) => RenderState::Succeeded(path.clone()),
            Err(e) if e.is_timeout() => RenderState::TimedOut,
            Err(e) => RenderState::Failed(e.kind.to_string()),
        };
        self.transition(state);
    }

    /// Stem of the script file, which names the renderer's output directory.
    pub fn script_stem(&self) -> &str {
        self.script_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("scene")
    }

    fn transition(&mut self, next: RenderState) {
        debug!(job_id = %self.id, from = %self.state, to = %next, "Render job transition");
        self.state = next;
    }
}
