//! Locating the video written by the renderer.
//!
//! Manim does not report where it wrote its output; the location follows from
//! the quality preset and the script file name:
//! `<job_dir>/media/videos/<script-stem>/720p30/*.mp4` for `-qm`.

use std::path::{Path, PathBuf};
use talk2diagram_error::{RenderError, RenderErrorKind, RenderResult};
use tokio::fs;

/// Resolution and frame-rate directory produced by the medium quality preset.
pub const OUTPUT_TAG: &str = "720p30";

/// Extension of the requested output format.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Directory the renderer writes videos for `script_stem` into.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use talk2diagram_render::video_dir;
///
/// assert_eq!(
///     video_dir(Path::new("/tmp/job"), "scene"),
///     Path::new("/tmp/job/media/videos/scene/720p30")
/// );
/// ```
pub fn video_dir(job_dir: &Path, script_stem: &str) -> PathBuf {
    job_dir
        .join("media")
        .join("videos")
        .join(script_stem)
        .join(OUTPUT_TAG)
}

/// Return the first video (by file name) in the conventional output directory.
pub async fn locate_video(job_dir: &Path, script_stem: &str) -> RenderResult<PathBuf> {
    let dir = video_dir(job_dir, script_stem);
    let not_found = || RenderError::new(RenderErrorKind::ArtifactNotFound(dir.display().to_string()));

    let mut entries = match fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(_) => return Err(not_found()),
    };

    let mut videos = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| RenderError::new(RenderErrorKind::Process(e.to_string())))?
    {
        let path = entry.path();
        let is_video = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(VIDEO_EXTENSION));
        if is_video && path.is_file() {
            videos.push(path);
        }
    }

    videos.sort();
    videos.into_iter().next().ok_or_else(not_found)
}
