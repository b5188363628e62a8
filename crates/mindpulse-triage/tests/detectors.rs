use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;
use mindpulse_triage::{all_detectors, detect_concerns};

fn check_in(medication_taken: bool, mood: i32, sleep: i32, activity: i32) -> CheckIn {
    CheckIn::new(medication_taken, mood, sleep, activity, "").unwrap()
}

#[test]
fn detectors_run_in_stable_order() {
    let ids: Vec<String> = all_detectors().iter().map(|d| d.id().to_string()).collect();
    assert_eq!(ids, ["medication", "mood", "sleep", "activity", "discrepancy"]);
}

#[test]
fn concerns_follow_detector_order() {
    let concerns = detect_concerns(&check_in(false, 2, 2, 1));
    assert_eq!(
        concerns.as_slice(),
        &[
            ConcernTag::MissedMedication,
            ConcernTag::LowMood,
            ConcernTag::PoorSleep,
            ConcernTag::MinimalActivity,
        ]
    );
}

#[test]
fn mood_bands_are_mutually_exclusive() {
    let expected = [
        (1, Some(ConcernTag::LowMood)),
        (3, Some(ConcernTag::LowMood)),
        (4, Some(ConcernTag::MediocreMood)),
        (5, Some(ConcernTag::MediocreMood)),
        (6, Some(ConcernTag::OkayMood)),
        (7, None),
        (10, None),
    ];
    for (mood, tag) in expected {
        let concerns = detect_concerns(&check_in(true, mood, 5, 5));
        let mood_tags: Vec<ConcernTag> = concerns
            .iter()
            .filter(|t| {
                matches!(
                    t,
                    ConcernTag::LowMood | ConcernTag::MediocreMood | ConcernTag::OkayMood
                )
            })
            .collect();
        assert_eq!(mood_tags, tag.into_iter().collect::<Vec<_>>(), "mood {mood}");
    }
}

#[test]
fn sleep_and_activity_bands() {
    assert!(detect_concerns(&check_in(true, 8, 3, 8)).contains(ConcernTag::PoorSleep));
    assert!(detect_concerns(&check_in(true, 8, 5, 8)).contains(ConcernTag::MediocreSleep));
    assert!(detect_concerns(&check_in(true, 8, 2, 2)).contains(ConcernTag::MinimalActivity));
    assert!(detect_concerns(&check_in(true, 8, 8, 3)).contains(ConcernTag::LowActivity));
    assert!(detect_concerns(&check_in(true, 8, 6, 6)).is_empty());
}

#[test]
fn physical_average_is_not_rounded() {
    // (7 + 6) / 2 = 6.5: below the plain discrepancy threshold.
    let concerns = detect_concerns(&check_in(true, 6, 7, 6));
    assert!(!concerns.contains(ConcernTag::MoodPhysicalDiscrepancy));

    // (8 + 6) / 2 = 7.0: exactly at it.
    let concerns = detect_concerns(&check_in(true, 6, 8, 6));
    assert!(concerns.contains(ConcernTag::MoodPhysicalDiscrepancy));
}

#[test]
fn severe_discrepancy_does_not_suppress_plain_discrepancy() {
    let concerns = detect_concerns(&check_in(true, 4, 9, 9));
    assert_eq!(
        concerns.as_slice(),
        &[
            ConcernTag::MediocreMood,
            ConcernTag::MoodPhysicalDiscrepancy,
            ConcernTag::SevereMoodDiscrepancy,
        ]
    );
}

#[test]
fn severe_discrepancy_can_fire_alone() {
    // (7 + 5) / 2 = 6.0 with mood 4.
    let concerns = detect_concerns(&check_in(true, 4, 7, 5));
    assert!(concerns.contains(ConcernTag::SevereMoodDiscrepancy));
    assert!(!concerns.contains(ConcernTag::MoodPhysicalDiscrepancy));
}
