//! Provider alert predicate.
//!
//! Counts raw threshold breaches rather than concern tags, so it is
//! narrower than the concern bands: a mediocre mood or sleep never counts
//! toward alerting.

use mindpulse_core::models::alert::{AlertDecision, AlertTrigger};
use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernSet;
use mindpulse_core::models::risk::RiskLevel;
use tracing::warn;

use crate::{Triage, detect_concerns};

pub const CRITICAL_MOOD_MAX: u8 = 3;
pub const CRITICAL_SLEEP_MAX: u8 = 3;
pub const MINIMAL_ACTIVITY_MAX: u8 = 2;

/// Number of raw concerning factors: critical mood, critical sleep,
/// missed medication, minimal activity.
pub fn concerning_factors(check_in: &CheckIn) -> u8 {
    [
        check_in.mood_rating() <= CRITICAL_MOOD_MAX,
        check_in.sleep_quality() <= CRITICAL_SLEEP_MAX,
        !check_in.medication_taken(),
        check_in.physical_activity() <= MINIMAL_ACTIVITY_MAX,
    ]
    .into_iter()
    .map(u8::from)
    .sum()
}

/// Decide whether a provider should be alerted for this check-in.
pub fn evaluate(check_in: &CheckIn, risk_level: RiskLevel) -> AlertDecision {
    decide(check_in, risk_level, detect_concerns(check_in))
}

/// Same decision as [`evaluate`], reusing the concerns already detected by
/// [`crate::triage`].
pub fn evaluate_with(check_in: &CheckIn, triage: &Triage) -> AlertDecision {
    decide(check_in, triage.risk_level, triage.concerns.clone())
}

fn decide(check_in: &CheckIn, risk_level: RiskLevel, concerns: ConcernSet) -> AlertDecision {
    let factors = concerning_factors(check_in);

    let mut triggers = Vec::new();
    if factors >= 3 {
        triggers.push(AlertTrigger::ConcerningFactors);
    }
    if risk_level == RiskLevel::High && factors >= 2 {
        triggers.push(AlertTrigger::HighRiskWithFactors);
    }
    if check_in.mood_rating() <= CRITICAL_MOOD_MAX && !check_in.medication_taken() {
        triggers.push(AlertTrigger::CriticalMoodWithoutMedication);
    }

    let should_alert = !triggers.is_empty();

    if should_alert {
        warn!(
            factors,
            risk = %risk_level,
            concerns = %concerns,
            "deterioration detected"
        );
    }

    AlertDecision {
        should_alert,
        risk_level,
        concerns,
        concerning_factors: factors,
        triggers,
    }
}
