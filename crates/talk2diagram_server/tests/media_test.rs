//! Tests for publishing rendered videos.

use talk2diagram_server::{ServerErrorKind, publish_video, video_url};

#[tokio::test]
async fn test_publish_moves_video_under_fresh_name() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("CircleDemo.mp4");
    std::fs::write(&video, b"frames").unwrap();
    let media_dir = dir.path().join("media");

    let published = publish_video(&video, &media_dir).await.unwrap();

    assert!(!video.exists());
    assert_eq!(published.parent().unwrap(), media_dir);
    assert_eq!(published.extension().unwrap(), "mp4");
    assert_ne!(published.file_stem().unwrap(), "CircleDemo");
    assert_eq!(std::fs::read(&published).unwrap(), b"frames");
}

#[tokio::test]
async fn test_publish_names_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let media_dir = dir.path().join("media");

    let mut names = Vec::new();
    for i in 0..3 {
        let video = dir.path().join(format!("{i}.mp4"));
        std::fs::write(&video, b"x").unwrap();
        names.push(publish_video(&video, &media_dir).await.unwrap());
    }

    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn test_publish_missing_video_fails() {
    let dir = tempfile::tempdir().unwrap();

    let err = publish_video(&dir.path().join("nope.mp4"), &dir.path().join("media"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ServerErrorKind::Publish(_)));
}

#[test]
fn test_video_url_joins_without_double_slash() {
    assert_eq!(
        video_url("http://localhost:8000", "a.mp4"),
        "http://localhost:8000/media/a.mp4"
    );
    assert_eq!(
        video_url("https://diagrams.example/", "b.mp4"),
        "https://diagrams.example/media/b.mp4"
    );
}
