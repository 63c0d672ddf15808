//! Structural validation of generated scripts.

/// Substrings every renderable scene script must contain.
///
/// This is a textual proxy, not a parser: occurrences inside comments or
/// strings count too.
pub const REQUIRED_ELEMENTS: [&str; 4] = ["from manim import *", "class", "Scene", "def construct"];

/// Returns true only if every [`REQUIRED_ELEMENTS`] entry appears verbatim.
///
/// # Examples
///
/// ```
/// use talk2diagram_script::validate_script;
///
/// let script = "from manim import *\n\nclass Demo(Scene):\n    def construct(self):\n        self.wait(0.5)";
/// assert!(validate_script(script));
/// assert!(!validate_script("print('hello')"));
/// ```
pub fn validate_script(script: &str) -> bool {
    REQUIRED_ELEMENTS
        .iter()
        .all(|element| script.contains(element))
}
