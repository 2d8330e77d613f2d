use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Role of an entry in a single oracle request. `System` only ever appears
/// as the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        let role = match turn.role {
            Role::User => ChatRole::User,
            Role::Model => ChatRole::Model,
        };

        ChatMessage {
            role,
            content: turn.text.clone(),
        }
    }
}

/// Turn history of one chat session. Owned by whoever drives the chat; the
/// core only ever borrows or copies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversationSession {
    pub id: Uuid,
    turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            turns: Vec::new(),
            created_at: now,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn record_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn record_model(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model(text));
    }

    /// The most recent turn when it came from the model.
    pub fn latest_model_turn(&self) -> Option<&Turn> {
        self.turns.last().filter(|turn| turn.role == Role::Model)
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_is_append_only_until_cleared() {
        let mut session = ConversationSession::new();
        assert!(session.is_empty());
        assert!(session.latest_model_turn().is_none());

        session.record_user("Quiero 2 hamburguesas");
        assert!(session.latest_model_turn().is_none());

        session.record_model("¿A nombre de quién?");
        assert_eq!(
            session.turns(),
            &[
                Turn::user("Quiero 2 hamburguesas"),
                Turn::model("¿A nombre de quién?")
            ]
        );
        assert_eq!(
            session.latest_model_turn().map(|t| t.text.as_str()),
            Some("¿A nombre de quién?")
        );

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_turn_to_chat_message_keeps_role() {
        let message = ChatMessage::from(&Turn::model("hola"));
        assert_eq!(message.role, ChatRole::Model);
        assert_eq!(message.content, "hola");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let value = serde_json::to_value(Turn::user("hola")).unwrap();
        assert_eq!(value["role"], "user");
    }
}
