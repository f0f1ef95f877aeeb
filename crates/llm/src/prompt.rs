//! Prompt construction
//!
//! The persona instruction is fixed: every request carries the same system
//! message and a single user turn holding the English-normalized message.

use serde::{Deserialize, Serialize};

/// System persona conditioning every completion
pub const KRISHNA_PERSONA: &str =
    "You are Lord Krishna from the Mahabharata, giving wise, spiritual, and compassionate answers.";

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the two-message prompt for a user turn
pub fn persona_messages(user_input: &str) -> Vec<Message> {
    vec![
        Message::system(KRISHNA_PERSONA),
        Message::user(user_input),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_messages_shape() {
        let messages = persona_messages("How should I live?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, KRISHNA_PERSONA);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "How should I live?");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
