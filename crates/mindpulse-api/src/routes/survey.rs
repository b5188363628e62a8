use axum::Json;
use axum::extract::State;

use mindpulse_core::models::check_in::{CheckIn, CheckInSubmission};
use mindpulse_core::models::response::SurveyResponse;
use mindpulse_narrative::pipeline::analyze_survey_with_alert;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn analyze_survey(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<CheckInSubmission>,
) -> Result<Json<SurveyResponse>, ApiError> {
    let user_id = submission.user_id.clone();
    let check_in = CheckIn::try_from(submission)?;

    let notifier = &state.notifier;
    let outcome = analyze_survey_with_alert(&check_in, state.narrator.as_ref(), |decision| {
        notifier.notify(decision, user_id.as_deref());
    })
    .await;

    Ok(Json(outcome.response))
}
