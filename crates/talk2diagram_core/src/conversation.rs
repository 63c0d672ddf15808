//! Conversation turns exchanged between the user and the assistant.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
///
/// # Examples
///
/// ```
/// use talk2diagram_core::Sender;
///
/// assert_eq!(format!("{}", Sender::User), "User");
/// assert_eq!(format!("{}", Sender::Assistant), "Assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human asking for an animation
    User,
    /// The service answering
    Assistant,
}

/// A single immutable message in a conversation history.
///
/// An ordered `Vec<ConversationTurn>` is the conversation history; the order
/// of insertion is the order of the conversation.
///
/// # Examples
///
/// ```
/// use talk2diagram_core::{ConversationTurn, Sender};
///
/// let turn = ConversationTurn::user("Show a pendulum swinging");
/// assert_eq!(*turn.sender(), Sender::User);
/// assert_eq!(turn.content(), "Show a pendulum swinging");
/// assert!(turn.timestamp().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ConversationTurn {
    /// Message text
    content: String,
    /// Author of the message
    sender: Sender,
    /// When the message was produced, if known
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl ConversationTurn {
    /// Create a turn without a timestamp.
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender,
            timestamp: None,
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    /// Return a copy of this turn stamped with `timestamp`.
    pub fn with_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..self
        }
    }

    /// Return a copy of this turn stamped with the current time.
    pub fn stamped_now(self) -> Self {
        self.with_timestamp(Utc::now())
    }
}
