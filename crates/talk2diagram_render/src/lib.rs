//! Render orchestration for Talk2Diagram.
//!
//! Takes generated Manim source, renders it with the `manim` CLI in an
//! isolated per-job directory and finds the produced video.
//!
//! # Job Layout
//!
//! ```text
//! <temp_root>/
//! └── <job-uuid>/
//!     ├── scene.py
//!     └── media/videos/scene/720p30/<SceneName>.mp4   (written by manim)
//! ```
//!
//! Job directories are never removed automatically. Call
//! [`RenderOrchestrator::cleanup`] periodically to reclaim space.
//!
//! # Example
//!
//! ```no_run
//! use talk2diagram_core::RendererConfig;
//! use talk2diagram_render::RenderOrchestrator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = RenderOrchestrator::new(RendererConfig::default())?;
//! let source = std::fs::read_to_string("scene.py")?;
//!
//! match renderer.render(&source).await {
//!     Some(video) => println!("Rendered {}", video.display()),
//!     None => eprintln!("Render failed, see logs"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod entry_point;
mod job;
mod orchestrator;
mod subprocess;

pub use artifact::{OUTPUT_TAG, VIDEO_EXTENSION, locate_video, video_dir};
pub use entry_point::extract_scene_name;
pub use job::{RenderJob, RenderState, SCRIPT_FILENAME};
pub use orchestrator::RenderOrchestrator;
pub use subprocess::{MAX_OUTPUT_BYTES, ProcessOutput, run_with_timeout};
pub use talk2diagram_error::{RenderError, RenderErrorKind, RenderResult};
