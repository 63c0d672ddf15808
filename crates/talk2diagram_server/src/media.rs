//! Publishing rendered videos into the served media directory.

use std::path::{Path, PathBuf};
use talk2diagram_error::{ServerError, ServerErrorKind};
use talk2diagram_render::VIDEO_EXTENSION;
use tokio::fs;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Move `video` into `media_dir` under a fresh `<uuid>.mp4` name.
///
/// Tries a rename first and falls back to copy-then-remove, since the render
/// temp root is often on another filesystem.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Publish`] if the media directory cannot be
/// created or the file cannot be moved.
#[instrument(fields(video = %video.display(), media_dir = %media_dir.display()))]
pub async fn publish_video(video: &Path, media_dir: &Path) -> Result<PathBuf, ServerError> {
    fs::create_dir_all(media_dir)
        .await
        .map_err(|e| publish_error(media_dir, e))?;

    let destination = media_dir.join(format!("{}.{}", Uuid::new_v4(), VIDEO_EXTENSION));

    if let Err(e) = fs::rename(video, &destination).await {
        debug!(error = %e, "Rename failed, copying instead");
        fs::copy(video, &destination)
            .await
            .map_err(|e| publish_error(video, e))?;
        fs::remove_file(video)
            .await
            .map_err(|e| publish_error(video, e))?;
    }

    debug!(destination = %destination.display(), "Published video");
    Ok(destination)
}

/// Public URL of a published file.
///
/// # Examples
///
/// ```
/// use talk2diagram_server::video_url;
///
/// assert_eq!(
///     video_url("http://localhost:8000/", "abc.mp4"),
///     "http://localhost:8000/media/abc.mp4"
/// );
/// ```
pub fn video_url(public_base_url: &str, file_name: &str) -> String {
    format!("{}/media/{}", public_base_url.trim_end_matches('/'), file_name)
}

fn publish_error(path: &Path, e: std::io::Error) -> ServerError {
    ServerError::new(ServerErrorKind::Publish(format!("{}: {}", path.display(), e)))
}
