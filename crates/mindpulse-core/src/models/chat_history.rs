use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A conversation held under one session id.
///
/// Kept by the session store; `updated_at` drives expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub messages: Vec<ChatHistoryMessage>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// A single message in a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatHistoryMessage {
    pub role: ChatHistoryRole,
    pub content: String,
}

impl ChatHistoryMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatHistoryRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatHistoryRole::Assistant,
            content: content.into(),
        }
    }
}

/// Role of a chat history message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatHistoryRole {
    User,
    Assistant,
}
