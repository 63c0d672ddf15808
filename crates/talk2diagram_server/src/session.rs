//! In-memory conversation sessions.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use talk2diagram_core::ConversationTurn;
use tracing::debug;

/// Session used when a request does not name one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Conversation histories keyed by session id.
///
/// Cloning is cheap and every clone shares the same sessions. Locks are held
/// only for the duration of a single call.
///
/// # Examples
///
/// ```
/// use talk2diagram_core::ConversationTurn;
/// use talk2diagram_server::SessionStore;
///
/// let store = SessionStore::new();
/// store.append("s1", ConversationTurn::user("Draw a circle"));
/// store.append("s1", ConversationTurn::assistant("Done"));
///
/// assert_eq!(store.recent("s1", 1).len(), 1);
/// assert_eq!(store.history("s1").len(), 2);
/// assert!(store.history("other").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Vec<ConversationTurn>>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, creating the session if needed.
    pub fn append(&self, session_id: &str, turn: ConversationTurn) {
        let mut sessions = self.sessions.write();
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(turn);
        debug!(session_id, turns = history.len(), "Appended conversation turn");
    }

    /// The last `n` turns of a session, oldest first.
    pub fn recent(&self, session_id: &str, n: usize) -> Vec<ConversationTurn> {
        let sessions = self.sessions.read();
        sessions
            .get(session_id)
            .map(|history| history[history.len().saturating_sub(n)..].to_vec())
            .unwrap_or_default()
    }

    /// Full history of a session.
    pub fn history(&self, session_id: &str) -> Vec<ConversationTurn> {
        self.sessions
            .read()
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Empty one session's history. Returns whether the session existed.
    pub fn clear(&self, session_id: &str) -> bool {
        match self.sessions.write().get_mut(session_id) {
            Some(history) => {
                history.clear();
                true
            }
            None => false,
        }
    }

    /// Drop every session.
    pub fn clear_all(&self) {
        self.sessions.write().clear();
    }

    /// Number of known sessions, including emptied ones.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
