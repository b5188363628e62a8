use serde::{Deserialize, Serialize};

use super::concern::ConcernSet;
use super::risk::RiskLevel;

/// Which alert condition fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTrigger {
    /// Three or more raw concerning factors.
    ConcerningFactors,
    /// High risk with at least two raw concerning factors.
    HighRiskWithFactors,
    /// Mood at or below 3 with medication missed.
    CriticalMoodWithoutMedication,
}

impl AlertTrigger {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertTrigger::ConcerningFactors => "concerning_factors",
            AlertTrigger::HighRiskWithFactors => "high_risk_with_factors",
            AlertTrigger::CriticalMoodWithoutMedication => "critical_mood_without_medication",
        }
    }
}

/// Whether a provider should be alerted, plus the snapshot that decided it.
///
/// Computed from the check-in and the classified risk level only, so a
/// failed narrative never suppresses an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDecision {
    pub should_alert: bool,
    pub risk_level: RiskLevel,
    pub concerns: ConcernSet,
    pub concerning_factors: u8,
    pub triggers: Vec<AlertTrigger>,
}
