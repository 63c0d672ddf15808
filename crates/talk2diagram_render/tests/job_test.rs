//! Tests for the render job lifecycle.

use std::path::PathBuf;
use talk2diagram_render::{
    RenderError, RenderErrorKind, RenderJob, RenderResult, RenderState, SCRIPT_FILENAME,
};

#[tokio::test]
async fn test_create_makes_isolated_directory() {
    let root = tempfile::tempdir().unwrap();
    let job = RenderJob::create(root.path()).await.unwrap();

    assert!(job.dir().is_dir());
    assert!(job.dir().starts_with(root.path()));
    assert_eq!(job.dir().file_name().unwrap().to_string_lossy(), job.id().to_string());
    assert_eq!(job.script_path(), &job.dir().join(SCRIPT_FILENAME));
    assert_eq!(job.script_stem(), "scene");
    assert_eq!(job.state(), &RenderState::Created);
    assert!(job.scene().is_none());
}

#[tokio::test]
async fn test_create_builds_missing_root() {
    let base = tempfile::tempdir().unwrap();
    let root = base.path().join("nested").join("jobs");

    let job = RenderJob::create(&root).await.unwrap();

    assert!(job.dir().is_dir());
}

#[tokio::test]
async fn test_jobs_get_distinct_directories() {
    let root = tempfile::tempdir().unwrap();
    let first = RenderJob::create(root.path()).await.unwrap();
    let second = RenderJob::create(root.path()).await.unwrap();

    assert_ne!(first.id(), second.id());
    assert_ne!(first.dir(), second.dir());
}

#[tokio::test]
async fn test_lifecycle_to_success() {
    let root = tempfile::tempdir().unwrap();
    let mut job = RenderJob::create(root.path()).await.unwrap();

    job.write_source("class A(Scene):\n    pass\n").await.unwrap();
    assert_eq!(job.state(), &RenderState::SourceWritten);
    assert_eq!(
        std::fs::read_to_string(job.script_path()).unwrap(),
        "class A(Scene):\n    pass\n"
    );

    job.resolve_entry_point("A".to_string());
    assert_eq!(job.state(), &RenderState::EntryPointResolved);
    assert_eq!(job.scene().as_deref(), Some("A"));

    job.mark_running();
    assert_eq!(job.state(), &RenderState::Running);
    assert!(!job.state().is_terminal());

    let video = job.dir().join("A.mp4");
    let result: RenderResult<PathBuf> = Ok(video.clone());
    job.finish(&result);
    assert_eq!(job.state(), &RenderState::Succeeded(video));
    assert!(job.state().is_terminal());
}

#[tokio::test]
async fn test_finish_distinguishes_timeout_from_failure() {
    let root = tempfile::tempdir().unwrap();

    let mut timed_out = RenderJob::create(root.path()).await.unwrap();
    timed_out.finish(&Err(RenderError::new(RenderErrorKind::Timeout {
        elapsed_ms: 1000,
    })));
    assert_eq!(timed_out.state(), &RenderState::TimedOut);

    let mut failed = RenderJob::create(root.path()).await.unwrap();
    failed.finish(&Err(RenderError::new(RenderErrorKind::EntryPointNotFound)));
    assert!(matches!(failed.state(), RenderState::Failed(cause) if cause.contains("scene name")));
    assert!(failed.state().is_terminal());
}
