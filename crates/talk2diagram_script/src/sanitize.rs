//! Removal of markdown fencing from model output.

const FENCE: &str = "```";

/// Strip markdown code fences and a leading language hint from model output.
///
/// - No fence: the text is trimmed and returned.
/// - At least one complete fence pair: the body of the first block is
///   returned, minus a bare language tag on its first line.
/// - Unbalanced fencing: every fence marker is removed.
///
/// # Examples
///
/// ```
/// use talk2diagram_script::sanitize_script;
///
/// assert_eq!(sanitize_script("```python\nx = 1\n```"), "x = 1");
/// assert_eq!(sanitize_script("```\nx = 1\n```"), "x = 1");
/// assert_eq!(sanitize_script("  x = 1  "), "x = 1");
/// assert_eq!(sanitize_script("```python\nx = 1"), "python\nx = 1");
/// ```
pub fn sanitize_script(raw: &str) -> String {
    if !raw.contains(FENCE) {
        return raw.trim().to_string();
    }

    let parts: Vec<&str> = raw.split(FENCE).collect();
    if parts.len() >= 3 {
        return strip_language_tag(parts[1]).trim().to_string();
    }

    raw.replace(FENCE, "").trim().to_string()
}

/// Drop the first line of a fenced block when it is only a language identifier.
fn strip_language_tag(block: &str) -> &str {
    match block.split_once('\n') {
        Some((first, rest)) if is_language_tag(first.trim()) => rest,
        _ => block,
    }
}

/// True for a single identifier-like word such as `python`, `Python3` or `c++`.
///
/// Models spell the hint inconsistently, so any bare word counts rather than a
/// list of known names. A lone word on the first line of a fenced block is
/// never part of a usable scene: the script must open with the `manim` import,
/// and a stray first statement like `pass` is dropped along with the hint.
fn is_language_tag(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '.' | '#'))
        }
        _ => false,
    }
}
