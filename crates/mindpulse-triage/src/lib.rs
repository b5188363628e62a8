//! mindpulse-triage
//!
//! Deterministic risk triage for a daily check-in. Pure functions with no
//! I/O and no model dependency: concern detectors, the ordered risk rule
//! table and the provider alert predicate.

pub mod alert;
pub mod bands;
pub mod detectors;
pub mod rules;

use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::{ConcernSet, ConcernTag};
use mindpulse_core::models::risk::RiskLevel;
use serde::Serialize;

use rules::RiskRule;

/// Trait implemented by each concern detector.
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector (e.g., "mood", "discrepancy").
    fn id(&self) -> &str;

    /// The concern tags this detector raises for a check-in, in a stable order.
    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag>;
}

/// Return all registered detectors in evaluation order.
///
/// The order fixes the order of the resulting [`ConcernSet`]: medication,
/// mood, sleep, activity, then discrepancy tags.
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(detectors::medication::MedicationDetector),
        Box::new(detectors::mood::MoodDetector),
        Box::new(detectors::sleep::SleepDetector),
        Box::new(detectors::activity::ActivityDetector),
        Box::new(detectors::discrepancy::DiscrepancyDetector),
    ]
}

/// Run every detector over a check-in and collect the concern set.
pub fn detect_concerns(check_in: &CheckIn) -> ConcernSet {
    all_detectors()
        .iter()
        .flat_map(|detector| detector.detect(check_in))
        .collect()
}

/// The outcome of triaging one check-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triage {
    pub concerns: ConcernSet,
    pub risk_level: RiskLevel,
    /// The first rule that matched, or `None` when the check-in is low risk.
    pub matched_rule: Option<RiskRule>,
    pub physical_average: f64,
}

/// Detect concerns and classify risk for a check-in.
pub fn triage(check_in: &CheckIn) -> Triage {
    let concerns = detect_concerns(check_in);
    let matched_rule = rules::first_match(check_in, &concerns);
    let risk_level = matched_rule.map_or(RiskLevel::Low, RiskRule::level);
    let physical_average = check_in.physical_average();

    if concerns.contains(ConcernTag::SevereMoodDiscrepancy) {
        tracing::warn!(
            physical_average,
            mood = check_in.mood_rating(),
            "severe mood discrepancy detected"
        );
    } else if concerns.contains(ConcernTag::MoodPhysicalDiscrepancy) {
        tracing::warn!(
            physical_average,
            mood = check_in.mood_rating(),
            "mood discrepancy detected"
        );
    }

    tracing::debug!(
        risk = %risk_level,
        rule = matched_rule.map_or("none", RiskRule::as_str),
        concerns = %concerns,
        "check-in triaged"
    );

    Triage {
        concerns,
        risk_level,
        matched_rule,
        physical_average,
    }
}
