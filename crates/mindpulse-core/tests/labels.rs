use mindpulse_core::models::concern::{ConcernSet, ConcernTag};
use mindpulse_core::models::risk::RiskLevel;

#[test]
fn risk_levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::Moderate < RiskLevel::High);
}

#[test]
fn risk_label_parsing_is_lenient_about_case_and_whitespace() {
    assert_eq!(RiskLevel::from_label(" High "), Some(RiskLevel::High));
    assert_eq!(RiskLevel::from_label("MODERATE"), Some(RiskLevel::Moderate));
    assert_eq!(RiskLevel::from_label("low"), Some(RiskLevel::Low));
    assert_eq!(RiskLevel::from_label("severe"), None);
    assert_eq!(RiskLevel::from_label(""), None);
}

#[test]
fn risk_level_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&RiskLevel::Moderate).unwrap(), "\"moderate\"");
}

#[test]
fn concern_labels_replace_underscores() {
    assert_eq!(ConcernTag::MissedMedication.label(), "missed medication");
    assert_eq!(ConcernTag::MoodPhysicalDiscrepancy.to_string(), "mood_physical_discrepancy");
    assert_eq!("Poor_Sleep".parse::<ConcernTag>().unwrap(), ConcernTag::PoorSleep);
    assert!("tired".parse::<ConcernTag>().is_err());
}

#[test]
fn concern_weights_partition_the_tags() {
    for tag in ConcernTag::ALL {
        let weights = [tag.is_critical(), tag.is_mediocre(), tag.is_discrepancy()];
        assert_eq!(weights.iter().filter(|w| **w).count(), 1, "{tag}");
    }
}

#[test]
fn concern_set_dedupes_and_keeps_order() {
    let set: ConcernSet = [
        ConcernTag::PoorSleep,
        ConcernTag::LowMood,
        ConcernTag::PoorSleep,
        ConcernTag::MoodPhysicalDiscrepancy,
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 3);
    assert_eq!(set.critical_count(), 2);
    assert!(set.has_discrepancy());
    assert_eq!(set.names(2), vec!["poor_sleep", "low_mood"]);
    assert_eq!(set.to_string(), "poor_sleep, low_mood, mood_physical_discrepancy");
    assert_eq!(ConcernSet::empty().to_string(), "none");
}

#[test]
fn concern_set_serializes_as_plain_list() {
    let set: ConcernSet = [ConcernTag::MissedMedication, ConcernTag::LowActivity]
        .into_iter()
        .collect();
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"["missed_medication","low_activity"]"#
    );
}
