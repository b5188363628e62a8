//! Merge the parsed model reply with computed triage into the caller's
//! response.

use mindpulse_core::models::alert::AlertDecision;
use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::response::{MAX_LISTED, SurveyResponse};
use mindpulse_triage::Triage;

use crate::fallback::Fallback;
use crate::parse::ParsedNarrative;

/// Build the response for a check-in.
///
/// Message and recommendations come from the parsed reply when present and
/// from [`Fallback`] otherwise. The parsed risk level and concerns only
/// change what is displayed; `provider_contacted` always comes from the
/// alert decision, which was made from the computed triage.
pub fn assemble(
    parsed: ParsedNarrative,
    triage: &Triage,
    check_in: &CheckIn,
    alert: &AlertDecision,
) -> SurveyResponse {
    let ParsedNarrative {
        message,
        recommendations,
        concerns,
        risk_level,
    } = parsed;

    let fallback = (message.is_empty() || recommendations.is_empty())
        .then(|| Fallback::select(triage.risk_level, &triage.concerns, check_in));

    let (message, recommendations) = match fallback {
        Some(fallback) => {
            tracing::debug!(branch = fallback.branch.as_str(), "filling narrative from fallback");
            let message = if message.is_empty() {
                fallback.message
            } else {
                message
            };
            let recommendations = if recommendations.is_empty() {
                fallback.recommendations.into()
            } else {
                recommendations
            };
            (message, recommendations)
        }
        None => (message, recommendations),
    };

    let key_concerns = if concerns.is_empty() {
        triage.concerns.names(MAX_LISTED)
    } else {
        concerns.into_iter().take(MAX_LISTED).collect()
    };

    SurveyResponse {
        message: message.trim().to_string(),
        recommendations: recommendations.into_iter().take(MAX_LISTED).collect(),
        risk_level: risk_level.unwrap_or(triage.risk_level),
        key_concerns,
        provider_contacted: alert.should_alert,
    }
}

/// The response when the model produced nothing at all.
pub fn assemble_fallback(triage: &Triage, check_in: &CheckIn, alert: &AlertDecision) -> SurveyResponse {
    assemble(ParsedNarrative::default(), triage, check_in, alert)
}
