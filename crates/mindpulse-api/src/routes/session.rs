use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use mindpulse_core::models::chat_history::ChatHistoryMessage;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionHistory {
    session_id: String,
    message_count: usize,
    history: Vec<ChatHistoryMessage>,
}

#[derive(Serialize)]
pub struct SessionCleared {
    session_id: String,
    status: &'static str,
    existed: bool,
}

/// History for a session; unknown or expired sessions have an empty one.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionHistory>, ApiError> {
    let history = state
        .sessions
        .history(&id)?
        .map(|session| session.messages)
        .unwrap_or_default();

    Ok(Json(SessionHistory {
        session_id: id,
        message_count: history.len(),
        history,
    }))
}

pub async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionCleared>, ApiError> {
    let existed = state.sessions.evict(&id)?;
    tracing::info!(session_id = %id, existed, "session cleared");

    Ok(Json(SessionCleared {
        session_id: id,
        status: "cleared",
        existed,
    }))
}
