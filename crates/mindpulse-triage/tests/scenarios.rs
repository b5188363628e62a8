use mindpulse_core::models::alert::AlertTrigger;
use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;
use mindpulse_core::models::risk::RiskLevel;
use mindpulse_triage::rules::RiskRule;
use mindpulse_triage::{alert, triage};

fn check_in(medication_taken: bool, mood: i32, sleep: i32, activity: i32) -> CheckIn {
    CheckIn::new(medication_taken, mood, sleep, activity, "").unwrap()
}

#[test]
fn missed_medication_with_very_low_mood_is_high_and_alerts() {
    let input = check_in(false, 2, 6, 5);
    let result = triage(&input);

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        result.matched_rule,
        Some(RiskRule::MissedMedicationWithCriticalMood)
    );

    let decision = alert::evaluate(&input, result.risk_level);
    assert!(decision.should_alert);
    assert_eq!(decision.concerning_factors, 2);
    assert!(decision
        .triggers
        .contains(&AlertTrigger::CriticalMoodWithoutMedication));
}

#[test]
fn four_critical_concerns_are_high_and_alert() {
    let input = check_in(false, 2, 2, 1);
    let result = triage(&input);

    assert_eq!(result.concerns.critical_count(), 4);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(RiskRule::ThreeCriticalConcerns.matches(&input, &result.concerns));

    let decision = alert::evaluate(&input, result.risk_level);
    assert!(decision.should_alert);
    assert_eq!(decision.concerning_factors, 4);
    assert!(decision.triggers.contains(&AlertTrigger::ConcerningFactors));
}

#[test]
fn healthy_check_in_is_low_with_no_concerns() {
    let input = check_in(true, 8, 8, 7);
    let result = triage(&input);

    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.concerns.is_empty());
    assert_eq!(result.matched_rule, None);

    let decision = alert::evaluate(&input, result.risk_level);
    assert!(!decision.should_alert);
    assert!(decision.triggers.is_empty());
}

#[test]
fn severe_discrepancy_is_high_even_with_medication_taken() {
    let input = check_in(true, 4, 9, 9);
    let result = triage(&input);

    assert_eq!(result.physical_average, 9.0);
    assert!(result.concerns.contains(ConcernTag::SevereMoodDiscrepancy));
    assert_eq!(result.concerns.critical_count(), 0);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.matched_rule, Some(RiskRule::SevereMoodDiscrepancy));
}

#[test]
fn okay_mood_with_good_physical_health_is_moderate() {
    let input = check_in(true, 6, 8, 8);
    let result = triage(&input);

    assert_eq!(
        result.concerns.as_slice(),
        &[ConcernTag::OkayMood, ConcernTag::MoodPhysicalDiscrepancy]
    );
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert_eq!(result.matched_rule, Some(RiskRule::MoodPhysicalDiscrepancy));
    assert!(RiskRule::OkayMoodDespiteGoodHealth.matches(&input, &result.concerns));
}

#[test]
fn low_mood_and_poor_sleep_with_medication_is_moderate() {
    let result = triage(&check_in(true, 4, 3, 4));
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn one_minor_concern_stays_low() {
    let result = triage(&check_in(true, 7, 6, 4));
    assert_eq!(result.concerns.as_slice(), &[ConcernTag::LowActivity]);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn triage_serializes_with_snake_case_names() {
    let result = triage(&check_in(false, 2, 6, 5));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["risk_level"], "high");
    assert_eq!(json["matched_rule"], "missed_medication_with_critical_mood");
    assert_eq!(json["concerns"][0], "missed_medication");
    assert_eq!(json["physical_average"], 5.5);
}
