//! Conversation calls against the Bedrock Converse API.
//!
//! Converse takes an inference profile ID (for example
//! `us.anthropic.claude-sonnet-4-20250514-v1:0`) as its model id; bare
//! foundation model ids fail for on-demand throughput.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use mindpulse_core::models::chat_history::{ChatHistoryMessage, ChatHistoryRole};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BedrockError;

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

impl From<&ChatHistoryMessage> for ChatMessage {
    fn from(message: &ChatHistoryMessage) -> Self {
        let role = match message.role {
            ChatHistoryRole::User => ChatRole::User,
            ChatHistoryRole::Assistant => ChatRole::Assistant,
        };
        Self {
            role,
            content: message.content.clone(),
        }
    }
}

/// Sampling settings sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceSettings {
    pub max_tokens: i32,
    pub temperature: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// Send a conversation to Bedrock and return the assistant's reply text.
///
/// `messages` must start with a user turn and alternate roles.
pub async fn chat_converse(
    client: &aws_sdk_bedrockruntime::Client,
    model_id: &str,
    system_prompt: &str,
    messages: &[ChatMessage],
    settings: InferenceSettings,
) -> Result<String, BedrockError> {
    let mut converse_messages: Vec<Message> = Vec::with_capacity(messages.len());

    for msg in messages {
        let role = match msg.role {
            ChatRole::User => ConversationRole::User,
            ChatRole::Assistant => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(msg.content.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        converse_messages.push(message);
    }

    let inference_config = InferenceConfiguration::builder()
        .max_tokens(settings.max_tokens)
        .temperature(settings.temperature)
        .build();

    debug!(model_id, turns = converse_messages.len(), "calling converse");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(converse_messages))
        .inference_config(inference_config)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    Ok(response_text(output_message.content()))
}

/// Concatenate the text blocks of a reply, skipping any other block kinds.
pub fn response_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
