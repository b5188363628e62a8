//! Ordered risk classification rules.
//!
//! Rules are evaluated strictly in [`RiskRule::ORDERED`] order and the first
//! match decides the level. Every `High` rule precedes every `Moderate` rule;
//! reordering them changes the result for boundary check-ins (missed
//! medication with mood 2, sleep 2, activity 1 must land on
//! `ThreeCriticalConcerns`, not fall through to a moderate rule).

use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::{ConcernSet, ConcernTag};
use mindpulse_core::models::risk::RiskLevel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    // High
    SevereMoodDiscrepancy,
    MissedMedicationWithCriticalMood,
    ThreeCriticalConcerns,
    TwoCriticalConcernsWithSevereMood,
    MissedMedicationLowMoodPoorSleep,
    // Moderate
    MoodPhysicalDiscrepancy,
    TwoCriticalConcerns,
    MissedMedicationWithMediocreMetrics,
    CriticalMood,
    AllMetricsMediocre,
    OkayMoodDespiteGoodHealth,
}

impl RiskRule {
    pub const ORDERED: [RiskRule; 11] = [
        RiskRule::SevereMoodDiscrepancy,
        RiskRule::MissedMedicationWithCriticalMood,
        RiskRule::ThreeCriticalConcerns,
        RiskRule::TwoCriticalConcernsWithSevereMood,
        RiskRule::MissedMedicationLowMoodPoorSleep,
        RiskRule::MoodPhysicalDiscrepancy,
        RiskRule::TwoCriticalConcerns,
        RiskRule::MissedMedicationWithMediocreMetrics,
        RiskRule::CriticalMood,
        RiskRule::AllMetricsMediocre,
        RiskRule::OkayMoodDespiteGoodHealth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskRule::SevereMoodDiscrepancy => "severe_mood_discrepancy",
            RiskRule::MissedMedicationWithCriticalMood => "missed_medication_with_critical_mood",
            RiskRule::ThreeCriticalConcerns => "three_critical_concerns",
            RiskRule::TwoCriticalConcernsWithSevereMood => {
                "two_critical_concerns_with_severe_mood"
            }
            RiskRule::MissedMedicationLowMoodPoorSleep => "missed_medication_low_mood_poor_sleep",
            RiskRule::MoodPhysicalDiscrepancy => "mood_physical_discrepancy",
            RiskRule::TwoCriticalConcerns => "two_critical_concerns",
            RiskRule::MissedMedicationWithMediocreMetrics => {
                "missed_medication_with_mediocre_metrics"
            }
            RiskRule::CriticalMood => "critical_mood",
            RiskRule::AllMetricsMediocre => "all_metrics_mediocre",
            RiskRule::OkayMoodDespiteGoodHealth => "okay_mood_despite_good_health",
        }
    }

    /// The level this rule assigns when it matches.
    pub fn level(self) -> RiskLevel {
        match self {
            RiskRule::SevereMoodDiscrepancy
            | RiskRule::MissedMedicationWithCriticalMood
            | RiskRule::ThreeCriticalConcerns
            | RiskRule::TwoCriticalConcernsWithSevereMood
            | RiskRule::MissedMedicationLowMoodPoorSleep => RiskLevel::High,
            RiskRule::MoodPhysicalDiscrepancy
            | RiskRule::TwoCriticalConcerns
            | RiskRule::MissedMedicationWithMediocreMetrics
            | RiskRule::CriticalMood
            | RiskRule::AllMetricsMediocre
            | RiskRule::OkayMoodDespiteGoodHealth => RiskLevel::Moderate,
        }
    }

    /// Whether this rule's guard holds, considered in isolation.
    pub fn matches(self, check_in: &CheckIn, concerns: &ConcernSet) -> bool {
        let missed = !check_in.medication_taken();
        let mood = check_in.mood_rating();
        let sleep = check_in.sleep_quality();
        let activity = check_in.physical_activity();
        let critical = concerns.critical_count();

        match self {
            RiskRule::SevereMoodDiscrepancy => concerns.contains(ConcernTag::SevereMoodDiscrepancy),
            RiskRule::MissedMedicationWithCriticalMood => missed && mood <= 3,
            RiskRule::ThreeCriticalConcerns => critical >= 3,
            RiskRule::TwoCriticalConcernsWithSevereMood => critical >= 2 && mood <= 2,
            RiskRule::MissedMedicationLowMoodPoorSleep => missed && mood <= 4 && sleep <= 3,
            RiskRule::MoodPhysicalDiscrepancy => {
                concerns.contains(ConcernTag::MoodPhysicalDiscrepancy)
            }
            RiskRule::TwoCriticalConcerns => critical >= 2,
            RiskRule::MissedMedicationWithMediocreMetrics => missed && (mood <= 5 || sleep <= 5),
            RiskRule::CriticalMood => mood <= 3,
            RiskRule::AllMetricsMediocre => mood <= 5 && sleep <= 5 && activity <= 5,
            RiskRule::OkayMoodDespiteGoodHealth => mood == 6 && sleep >= 7 && activity >= 7,
        }
    }
}

/// The first rule, in priority order, whose guard holds.
pub fn first_match(check_in: &CheckIn, concerns: &ConcernSet) -> Option<RiskRule> {
    RiskRule::ORDERED
        .into_iter()
        .find(|rule| rule.matches(check_in, concerns))
}

/// Classify a check-in given its full concern set.
pub fn classify(check_in: &CheckIn, concerns: &ConcernSet) -> RiskLevel {
    first_match(check_in, concerns).map_or(RiskLevel::Low, RiskRule::level)
}
