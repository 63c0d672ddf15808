//! Tests for error construction and conversion.

use talk2diagram_error::{
    ConfigError, GeneratorError, GeneratorErrorKind, RenderError, RenderErrorKind,
    Talk2DiagramError, Talk2DiagramErrorKind, stderr_tail,
};

#[test]
fn test_location_is_captured_at_call_site() {
    let err = RenderError::new(RenderErrorKind::EntryPointNotFound);
    assert!(err.file.ends_with("error_kinds_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_nonzero_exit_display_includes_stderr() {
    let err = RenderError::new(RenderErrorKind::NonZeroExit {
        code: 2,
        stderr: "NameError: name 'Circl' is not defined".to_string(),
    });
    let message = err.to_string();
    assert!(message.contains("code 2"));
    assert!(message.contains("NameError"));
}

#[test]
fn test_nonzero_exit_display_keeps_stderr_tail() {
    let stderr: String = (1..=100).map(|i| format!("progress line {i}\n")).collect();
    let kind = RenderErrorKind::NonZeroExit {
        code: 1,
        stderr: stderr.clone(),
    };
    let message = kind.to_string();

    assert!(message.contains("progress line 100"));
    assert!(message.contains("progress line 96"));
    assert!(!message.contains("progress line 95"));
    assert!(message.len() < 200);
    match kind {
        RenderErrorKind::NonZeroExit { stderr: kept, .. } => assert_eq!(kept, stderr),
        other => panic!("unexpected kind: {other}"),
    }
}

#[test]
fn test_stderr_tail_bounds_long_lines() {
    let line = "é".repeat(3000);
    let tail = stderr_tail(&line);
    assert!(tail.len() <= 2048);
    assert!(line.ends_with(tail));
}

#[test]
fn test_timeout_predicate() {
    let timed_out = RenderError::new(RenderErrorKind::Timeout { elapsed_ms: 1_000 });
    let missing = RenderError::new(RenderErrorKind::ArtifactNotFound("/tmp/x".to_string()));
    assert!(timed_out.is_timeout());
    assert!(!missing.is_timeout());
}

#[test]
fn test_generator_error_converts_to_top_level() {
    let err: Talk2DiagramError =
        GeneratorError::new(GeneratorErrorKind::ModelMissing("llama3".to_string())).into();
    match err.kind() {
        Talk2DiagramErrorKind::Generator(inner) => {
            assert_eq!(
                inner.kind,
                GeneratorErrorKind::ModelMissing("llama3".to_string())
            );
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_config_error_display() {
    let err: Talk2DiagramError = ConfigError::new("history_window must be positive").into();
    assert!(err.to_string().contains("history_window"));
}
