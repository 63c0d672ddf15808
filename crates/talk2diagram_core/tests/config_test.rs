//! Tests for layered configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use talk2diagram_core::{AppConfig, BackendConfig, RendererConfig};

#[test]
fn test_bundled_defaults_match_struct_defaults() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_default_backend_values() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config.backend.base_url, "http://localhost:11434");
    assert_eq!(config.backend.model, "deepseek-coder-v2:latest");
    assert_eq!(config.backend.request_timeout(), Duration::from_secs(120));
    assert_eq!(config.backend.sampling.num_ctx, 4096);
    assert!((config.backend.sampling.temperature - 0.1).abs() < f32::EPSILON);
    assert!((config.backend.sampling.top_p - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_override_merges_with_defaults() {
    let config = AppConfig::from_toml_str(
        r#"
        [renderer]
        program = "/opt/manim/bin/manim"
        render_timeout_secs = 60

        [server]
        history_window = 10
        "#,
    )
    .unwrap();

    assert_eq!(config.renderer.program, PathBuf::from("/opt/manim/bin/manim"));
    assert_eq!(config.renderer.render_timeout(), Duration::from_secs(60));
    assert_eq!(config.renderer.version_timeout(), Duration::from_secs(10));
    assert_eq!(config.server.history_window, 10);
    assert_eq!(config.backend.model, "deepseek-coder-v2:latest");
}

#[test]
fn test_zero_history_window_is_rejected() {
    let result = AppConfig::from_toml_str("[server]\nhistory_window = 0");
    assert!(result.is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[backend]\nmodel = \"qwen2.5-coder:7b\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.backend.model, "qwen2.5-coder:7b");
    assert_eq!(config.renderer.program, PathBuf::from("manim"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = AppConfig::from_file("/definitely/not/here/talk2diagram.toml");
    assert!(result.is_err());
}

#[test]
fn test_endpoint_joins_without_double_slash() {
    let backend = BackendConfig {
        base_url: "http://ollama:11434/".to_string(),
        ..BackendConfig::default()
    };
    assert_eq!(backend.endpoint("/api/tags"), "http://ollama:11434/api/tags");
}

#[test]
fn test_temp_root_falls_back_to_system_temp() {
    let renderer = RendererConfig::default();
    assert_eq!(
        renderer.resolved_temp_root(),
        std::env::temp_dir().join("talk2diagram")
    );

    let explicit = RendererConfig {
        temp_root: Some(PathBuf::from("/var/tmp/renders")),
        ..RendererConfig::default()
    };
    assert_eq!(explicit.resolved_temp_root(), PathBuf::from("/var/tmp/renders"));
}
