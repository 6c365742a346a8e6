use serde::{Deserialize, Serialize};

use crate::{Message, Role};

const GREETING: &str = "How can I help?";

/// The in-memory chat transcript for one session. Append-only and seeded
/// with a single assistant greeting, so it is never empty. Resetting a chat
/// means constructing a fresh `Conversation`, not mutating this one.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_role(&self) -> Role {
        // Invariant: seeded on construction, append-only afterwards.
        self.messages
            .last()
            .map(|message| message.role)
            .unwrap_or(Role::Assistant)
    }

    /// True when the newest message is an unanswered user turn.
    pub fn awaiting_reply(&self) -> bool {
        self.last_role() != Role::Assistant
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
