use axum::Json;
use axum::extract::State;
use mindpulse_notify::sms::DeliveryPlan;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    /// `healthy` with a narrative model configured, `degraded` when every
    /// check-in is answered from fallback content.
    status: &'static str,
    narrative_model: bool,
    sms_alerts: &'static str,
    active_sessions: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    let narrative_model = state.narrator.is_available();
    let sms_alerts = match state.notifier.plan() {
        DeliveryPlan::Disabled => "disabled",
        DeliveryPlan::Incomplete => "misconfigured",
        DeliveryPlan::Send => "enabled",
    };

    Ok(Json(HealthStatus {
        status: if narrative_model { "healthy" } else { "degraded" },
        narrative_model,
        sms_alerts,
        active_sessions: state.sessions.active_sessions()?,
    }))
}
