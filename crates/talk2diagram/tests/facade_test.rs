//! Tests for the pipeline pieces exposed through the facade crate.

use talk2diagram::{
    AppConfig, ConversationTurn, HealthResponse, build_prompt, extract_scene_name,
    sanitize_script, validate_script,
};

const LLM_REPLY: &str = "Here you go:\n```python\nfrom manim import *\n\nclass WaveDemo(Scene):\n    def construct(self):\n        self.play(Create(FunctionGraph(lambda x: x)))\n        self.wait(0.5)\n```";

#[test]
fn test_reply_to_entry_point() {
    let script = sanitize_script(LLM_REPLY);

    assert!(script.starts_with("from manim import *"));
    assert!(validate_script(&script));
    assert_eq!(extract_scene_name(&script), Some("WaveDemo".to_string()));
}

#[test]
fn test_prompt_includes_prior_turns_only() {
    let history = vec![
        ConversationTurn::user("Draw a circle"),
        ConversationTurn::assistant("Animation generated successfully! Here's your visualization."),
        ConversationTurn::user("Make it red"),
    ];

    let prompt = build_prompt("Make it red", &history);

    assert!(prompt.contains("User: Draw a circle"));
    assert!(prompt.contains("Assistant: Animation generated successfully!"));
    assert!(!prompt.contains("User: Make it red"));
    assert!(prompt.contains("Current user request: Make it red"));
}

#[test]
fn test_config_overrides_flow_through() {
    let config = AppConfig::from_toml_str(
        "[renderer]\nprogram = \"/opt/manim/bin/manim\"\n\n[server]\nhistory_window = 10\n",
    )
    .unwrap();

    assert_eq!(config.renderer.program.to_string_lossy(), "/opt/manim/bin/manim");
    assert_eq!(config.server.history_window, 10);
    assert_eq!(config.backend.sampling.num_ctx, 4096);
}

#[test]
fn test_health_summary() {
    assert!(HealthResponse::from_checks(true, true).is_healthy());
    assert!(!HealthResponse::from_checks(false, true).is_healthy());
}
