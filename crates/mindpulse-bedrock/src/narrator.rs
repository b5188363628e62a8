use std::time::Duration;

use mindpulse_core::models::chat_history::ChatHistoryMessage;
use mindpulse_narrative::error::GenerationError;
use mindpulse_narrative::generator::{BoxFuture, NarrativeGenerator};
use tracing::warn;

use crate::chat::{ChatMessage, ChatRole, InferenceSettings, chat_converse};
use crate::error::BedrockError;

/// Settings for a [`BedrockNarrator`].
#[derive(Debug, Clone, PartialEq)]
pub struct NarratorConfig {
    /// Inference profile ID passed to Converse.
    pub model_id: String,
    pub inference: InferenceSettings,
    /// Upper bound on a single Converse call, including retries inside the SDK.
    pub timeout: Duration,
}

/// [`NarrativeGenerator`] backed by Bedrock Converse.
#[derive(Debug, Clone)]
pub struct BedrockNarrator {
    client: aws_sdk_bedrockruntime::Client,
    config: NarratorConfig,
}

impl BedrockNarrator {
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        config: NarratorConfig,
    ) -> Result<Self, BedrockError> {
        if config.model_id.trim().is_empty() {
            return Err(BedrockError::Config("model id is empty".to_string()));
        }
        if config.timeout.is_zero() {
            return Err(BedrockError::Config("timeout must be positive".to_string()));
        }
        Ok(Self {
            client: aws_sdk_bedrockruntime::Client::new(sdk_config),
            config,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, GenerationError> {
        let call = chat_converse(
            &self.client,
            &self.config.model_id,
            system_prompt,
            messages,
            self.config.inference,
        );

        match tokio::time::timeout(self.config.timeout, call).await {
            Ok(Ok(text)) => non_blank(text),
            Ok(Err(e)) => {
                warn!(model_id = %self.config.model_id, error = %e, "converse failed");
                Err(GenerationError::Unavailable(e.to_string()))
            }
            Err(_) => {
                warn!(
                    model_id = %self.config.model_id,
                    timeout_secs = self.config.timeout.as_secs(),
                    "converse timed out"
                );
                Err(GenerationError::Timeout(self.config.timeout.as_secs()))
            }
        }
    }
}

impl NarrativeGenerator for BedrockNarrator {
    fn is_available(&self) -> bool {
        true
    }

    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            let messages = [ChatMessage::user(user_prompt)];
            self.complete(system_prompt, &messages).await
        })
    }

    fn converse<'a>(
        &'a self,
        system_prompt: &'a str,
        history: &'a [ChatHistoryMessage],
        message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            let messages = conversation(history, message);
            self.complete(system_prompt, &messages).await
        })
    }
}

/// Build the Converse message list for a new user turn.
///
/// Converse requires the first turn to come from the user, so any leading
/// assistant turns in the history are dropped.
pub fn conversation(history: &[ChatHistoryMessage], message: &str) -> Vec<ChatMessage> {
    history
        .iter()
        .map(ChatMessage::from)
        .skip_while(|m| m.role != ChatRole::User)
        .chain(std::iter::once(ChatMessage::user(message)))
        .collect()
}

/// Reject replies with no visible text.
pub fn non_blank(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        Err(GenerationError::Empty)
    } else {
        Ok(text)
    }
}
