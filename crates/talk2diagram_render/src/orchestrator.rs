//! Manim render orchestration.

use crate::{RenderJob, extract_scene_name, locate_video, run_with_timeout};
use std::path::{Path, PathBuf};
use talk2diagram_core::RendererConfig;
use talk2diagram_error::{RenderError, RenderErrorKind, RenderResult};
use tokio::process::Command;
use tracing::{debug, error, info, instrument, warn};

/// Quality, caching and format flags passed before the script path.
const RENDER_FLAGS: [&str; 3] = ["-qm", "--disable_caching", "--format=mp4"];

/// Renders scene source into video files with the `manim` CLI.
///
/// Stateless apart from configuration; concurrent renders are independent
/// because every job gets its own directory.
#[derive(Debug, Clone)]
pub struct RenderOrchestrator {
    config: RendererConfig,
    temp_root: PathBuf,
}

impl RenderOrchestrator {
    /// Create an orchestrator, creating the temp root if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the temp root cannot be created.
    #[instrument(name = "render_orchestrator_new", skip(config), fields(program = %config.program.display()))]
    pub fn new(config: RendererConfig) -> RenderResult<Self> {
        let temp_root = config.resolved_temp_root();

        std::fs::create_dir_all(&temp_root).map_err(|e| {
            RenderError::new(RenderErrorKind::Workspace(format!(
                "{}: {}",
                temp_root.display(),
                e
            )))
        })?;

        info!(temp_root = %temp_root.display(), "Creating render orchestrator");

        Ok(Self { config, temp_root })
    }

    /// Root directory holding all job directories.
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Renderer settings in use.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// True iff `<program> --version` exits zero within the version timeout.
    #[instrument(skip(self), fields(program = %self.config.program.display()))]
    pub async fn check_renderer_installed(&self) -> bool {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg("--version");

        match run_with_timeout(&mut cmd, self.config.version_timeout()).await {
            Ok(output) => {
                debug!(exit_code = output.exit_code, version = %output.stdout.trim(), "Renderer version probe finished");
                output.success()
            }
            Err(e) => {
                debug!(error = %e, "Renderer version probe failed");
                false
            }
        }
    }

    /// Render `source` and return the video path, or `None` on any failure.
    ///
    /// The cause of a failure is logged by [`Self::try_render`], not returned.
    pub async fn render(&self, source: &str) -> Option<PathBuf> {
        self.try_render(source).await.ok()
    }

    /// Render `source`, reporting the failure cause.
    ///
    /// Each failure is logged once here; a non-zero exit additionally logs
    /// the full renderer stderr, which the error message shortens.
    #[instrument(skip(self, source), fields(source_length = source.len()))]
    pub async fn try_render(&self, source: &str) -> RenderResult<PathBuf> {
        let mut job = RenderJob::create(&self.temp_root).await?;
        let result = self.run_job(&mut job, source).await;
        job.finish(&result);

        match &result {
            Ok(path) => info!(job_id = %job.id(), video = %path.display(), "Render succeeded"),
            Err(e) => error!(job_id = %job.id(), state = %job.state(), error = %e, "Error rendering video"),
        }

        result
    }

    async fn run_job(&self, job: &mut RenderJob, source: &str) -> RenderResult<PathBuf> {
        job.write_source(source).await?;

        let scene = extract_scene_name(source)
            .ok_or_else(|| RenderError::new(RenderErrorKind::EntryPointNotFound))?;
        job.resolve_entry_point(scene.clone());

        let mut cmd = Command::new(&self.config.program);
        cmd.args(RENDER_FLAGS)
            .arg(job.script_path())
            .arg(&scene)
            .current_dir(job.dir());

        info!(
            job_id = %job.id(),
            scene = %scene,
            command = %format!("{} {} {} {}", self.config.program.display(), RENDER_FLAGS.join(" "), job.script_path().display(), scene),
            "Running renderer"
        );

        job.mark_running();
        let output = run_with_timeout(&mut cmd, self.config.render_timeout()).await?;

        if !output.success() {
            warn!(
                job_id = %job.id(),
                exit_code = output.exit_code,
                stderr = %output.stderr,
                "Renderer exited with non-zero status"
            );
            return Err(RenderError::new(RenderErrorKind::NonZeroExit {
                code: output.exit_code,
                stderr: output.stderr,
            }));
        }

        debug!(job_id = %job.id(), duration_ms = output.duration_ms, "Renderer exited cleanly");
        locate_video(job.dir(), job.script_stem()).await
    }

    /// Remove every job directory by recreating the temp root empty.
    ///
    /// Never invoked automatically; failures are logged.
    pub async fn cleanup(&self) {
        if let Err(e) = self.try_cleanup().await {
            error!(error = %e, "Error cleaning temp files");
        }
    }

    /// Remove every job directory, reporting failures.
    #[instrument(skip(self), fields(temp_root = %self.temp_root.display()))]
    pub async fn try_cleanup(&self) -> RenderResult<()> {
        if tokio::fs::try_exists(&self.temp_root).await.unwrap_or(false) {
            tokio::fs::remove_dir_all(&self.temp_root)
                .await
                .map_err(|e| RenderError::new(RenderErrorKind::Cleanup(e.to_string())))?;
        }

        tokio::fs::create_dir_all(&self.temp_root)
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Cleanup(e.to_string())))?;

        info!("Temporary render files removed");
        Ok(())
    }
}
