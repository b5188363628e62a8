use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindpulse_core::models::chat_history::ChatHistoryMessage;
use mindpulse_narrative::prompt::COUNSELOR_SYSTEM_PROMPT;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Shown when the model cannot answer. History is left untouched.
pub const CHAT_APOLOGY: &str = "I apologize, but I'm having trouble processing your request \
right now. Please try again or seek immediate help if you're in crisis. \
National Suicide Prevention Lifeline: 988";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

pub async fn chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }

    let session_id = request
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let history = state
        .sessions
        .history(&session_id)?
        .map(|session| session.messages)
        .unwrap_or_default();

    let response = match state
        .narrator
        .converse(COUNSELOR_SYSTEM_PROMPT, &history, message)
        .await
    {
        Ok(reply) => {
            state.sessions.append(
                &session_id,
                vec![
                    ChatHistoryMessage::user(message),
                    ChatHistoryMessage::assistant(reply.as_str()),
                ],
            )?;
            reply
        }
        Err(e) => {
            tracing::warn!(session_id = %session_id, error = %e, "chat reply failed");
            CHAT_APOLOGY.to_string()
        }
    };

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}
