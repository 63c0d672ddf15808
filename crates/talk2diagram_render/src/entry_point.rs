//! Scene class discovery.

/// Find the name of the first scene class defined in `source`.
///
/// A line qualifies when, after trimming, it starts with `class ` and mentions
/// `Scene`. The identifier is the token after `class`, cut at the parameter
/// list (or at the trailing colon when there is none).
///
/// # Examples
///
/// ```
/// use talk2diagram_render::extract_scene_name;
///
/// assert_eq!(extract_scene_name("class MyScene(Scene):"), Some("MyScene".to_string()));
/// assert_eq!(extract_scene_name("x = 1"), None);
/// ```
pub fn extract_scene_name(source: &str) -> Option<String> {
    source
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("class ") && line.contains("Scene"))
        .and_then(|line| line.split_whitespace().nth(1))
        .map(|token| {
            let name = token.split('(').next().unwrap_or(token);
            name.trim_end_matches(':').to_string()
        })
        .filter(|name| !name.is_empty())
}
