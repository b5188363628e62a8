use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;

/// Recommendations and concerns shown to the caller are capped at this many entries.
pub const MAX_LISTED: usize = 3;

/// The narrative part of a check-in response: message, recommendations,
/// concerns and the risk level they were written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeResponse {
    pub message: String,
    pub recommendations: Vec<String>,
    pub concerns: Vec<String>,
    pub risk_level: RiskLevel,
}

/// The response contract returned to the caller for a daily check-in.
///
/// `provider_contacted` reflects that an alert condition was detected,
/// whether or not delivery of the alert succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyResponse {
    pub message: String,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    pub key_concerns: Vec<String>,
    pub provider_contacted: bool,
}
