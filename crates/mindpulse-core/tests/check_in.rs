use mindpulse_core::error::CoreError;
use mindpulse_core::models::check_in::{CheckIn, CheckInSubmission, RatingField};

#[test]
fn accepts_every_rating_in_range() {
    for rating in 1..=10 {
        let check_in = CheckIn::new(true, rating, rating, rating, "").unwrap();
        assert_eq!(i32::from(check_in.mood_rating()), rating);
    }
}

#[test]
fn rejects_out_of_range_ratings_instead_of_clamping() {
    let err = CheckIn::new(true, 0, 5, 5, "").unwrap_err();
    assert!(matches!(
        err,
        CoreError::RatingOutOfRange {
            field: RatingField::MoodRating,
            value: 0,
            ..
        }
    ));

    let err = CheckIn::new(true, 5, 11, 5, "").unwrap_err();
    assert!(matches!(
        err,
        CoreError::RatingOutOfRange {
            field: RatingField::SleepQuality,
            value: 11,
            ..
        }
    ));

    let err = CheckIn::new(true, 5, 5, -300, "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "physical_activity must be between 1 and 10, got -300"
    );
}

#[test]
fn physical_average_keeps_half_points() {
    let check_in = CheckIn::new(true, 5, 7, 6, "").unwrap();
    assert_eq!(check_in.physical_average(), 6.5);
}

#[test]
fn submission_defaults_optional_fields() {
    let submission: CheckInSubmission = serde_json::from_str(
        r#"{"medication_taken": false, "mood_rating": 4, "sleep_quality": 6, "physical_activity": 3}"#,
    )
    .unwrap();
    assert_eq!(submission.thoughts, "");
    assert_eq!(submission.user_id, None);

    let check_in = CheckIn::try_from(submission).unwrap();
    assert!(!check_in.medication_taken());
    assert_eq!(check_in.thoughts(), "");
}

#[test]
fn submission_with_bad_rating_fails_conversion() {
    let submission: CheckInSubmission = serde_json::from_str(
        r#"{"medication_taken": true, "mood_rating": 12, "sleep_quality": 6, "physical_activity": 3, "thoughts": "tired"}"#,
    )
    .unwrap();
    assert!(CheckIn::try_from(submission).is_err());
}
