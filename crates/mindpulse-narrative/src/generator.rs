use std::future::Future;
use std::pin::Pin;

use mindpulse_core::models::chat_history::ChatHistoryMessage;

use crate::error::GenerationError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A language model that writes narratives and chat replies.
///
/// Implementations own their timeout. A single failure is final: callers
/// fall back to deterministic content rather than retrying.
pub trait NarrativeGenerator: Send + Sync {
    /// Whether a model is configured at all.
    fn is_available(&self) -> bool;

    /// One-shot completion for a system and user prompt.
    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>>;

    /// Reply to `message` given the earlier turns of a conversation.
    fn converse<'a>(
        &'a self,
        system_prompt: &'a str,
        history: &'a [ChatHistoryMessage],
        message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>>;
}

/// Stands in when no model is configured. Every call reports
/// [`GenerationError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

const OFFLINE_REASON: &str = "no narrative model configured";

impl NarrativeGenerator for OfflineGenerator {
    fn is_available(&self) -> bool {
        false
    }

    fn generate<'a>(
        &'a self,
        _system_prompt: &'a str,
        _user_prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async { Err(GenerationError::Unavailable(OFFLINE_REASON.to_string())) })
    }

    fn converse<'a>(
        &'a self,
        _system_prompt: &'a str,
        _history: &'a [ChatHistoryMessage],
        _message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async { Err(GenerationError::Unavailable(OFFLINE_REASON.to_string())) })
    }
}
