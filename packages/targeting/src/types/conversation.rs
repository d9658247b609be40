//! Conversation types loaded from the session store.

use serde::{Deserialize, Serialize};

/// Speaker tag on a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One question/answer exchange from a stored chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub question: String,
    pub answer: String,
}

impl ConversationEntry {
    pub fn new(role: Role, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            role,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A role-tagged message in LLM chat format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// An ordered conversation. Entry order is chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLog {
    pub conversation: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new(conversation: Vec<ConversationEntry>) -> Self {
        Self { conversation }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.conversation
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }

    /// Reshape entries into chat messages: assistant entries contribute the
    /// question they asked, user entries the answer they gave.
    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        self.conversation
            .iter()
            .map(|entry| match entry.role {
                Role::Assistant => ChatMessage {
                    role: Role::Assistant,
                    content: entry.question.clone(),
                },
                Role::User => ChatMessage {
                    role: Role::User,
                    content: entry.answer.clone(),
                },
            })
            .collect()
    }

    /// Render the conversation as a role-tagged transcript for prompting.
    pub fn transcript(&self) -> String {
        self.chat_messages()
            .iter()
            .map(|message| format!("{}: {}", message.role.as_str(), message.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
