//! Prompt construction from conversation history.

use talk2diagram_core::{ConversationTurn, Sender};

/// Transcript used when there is no earlier conversation.
pub const NO_HISTORY_PLACEHOLDER: &str = "No previous conversation.";

/// Render a conversation as a `Role: content` transcript, one turn per line.
///
/// # Examples
///
/// ```
/// use talk2diagram_core::ConversationTurn;
/// use talk2diagram_script::format_history;
///
/// assert_eq!(format_history(&[]), "No previous conversation.");
/// assert_eq!(format_history(&[ConversationTurn::user("hi")]), "User: hi");
/// ```
pub fn format_history(turns: &[ConversationTurn]) -> String {
    if turns.is_empty() {
        return NO_HISTORY_PLACEHOLDER.to_string();
    }

    turns
        .iter()
        .map(|turn| {
            let role_prefix = match turn.sender() {
                Sender::User => "User: ",
                Sender::Assistant => "Assistant: ",
            };
            format!("{role_prefix}{}", turn.content())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the complete generation prompt.
///
/// `history` is expected to end with the current user turn, which the caller
/// has already appended; it is dropped from the transcript because the request
/// text is embedded separately.
pub fn build_prompt(user_text: &str, history: &[ConversationTurn]) -> String {
    let previous = &history[..history.len().saturating_sub(1)];
    let history_text = format_history(previous);

    format!(
        "You are an expert Python developer and Manim (Community Edition) animator who builds \
educational physics and mathematics visualizations.

You will be given a conversation history and a user request. Write a complete, valid Manim \
script that produces the requested animation.

IMPORTANT RULES:
1. Return ONLY valid Python code - no markdown, explanations, or extra text
2. Start the script with `from manim import *`
3. Define a class that inherits from Scene
4. Put the animation in its `def construct(self):` method
5. Use descriptive variable names and comments in the code
6. Favor educational clarity - make the concept visually obvious
7. Use appropriate colors, labels, and scales
8. Call self.wait(0.5) as the last line inside construct so a video file is always written

Previous conversation:
{history_text}

Current user request: {user_text}

Generate the complete Manim script now:"
    )
}
