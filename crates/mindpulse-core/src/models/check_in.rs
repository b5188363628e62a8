use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Inclusive bounds for a self-reported rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

impl RatingRange {
    pub fn contains(&self, value: i32) -> bool {
        value >= i32::from(self.min) && value <= i32::from(self.max)
    }
}

/// Every check-in rating is on a 1-10 scale.
pub const RATING_RANGE: RatingRange = RatingRange { min: 1, max: 10 };

/// The rating a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingField {
    MoodRating,
    SleepQuality,
    PhysicalActivity,
}

impl RatingField {
    pub fn as_str(self) -> &'static str {
        match self {
            RatingField::MoodRating => "mood_rating",
            RatingField::SleepQuality => "sleep_quality",
            RatingField::PhysicalActivity => "physical_activity",
        }
    }
}

impl fmt::Display for RatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A daily check-in exactly as the client submitted it.
///
/// Ratings are unvalidated here; convert into a [`CheckIn`] before handing
/// it to anything that classifies risk.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckInSubmission {
    pub medication_taken: bool,
    pub mood_rating: i32,
    pub sleep_quality: i32,
    pub physical_activity: i32,
    #[serde(default)]
    pub thoughts: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A validated daily check-in.
///
/// Immutable once built: every rating is guaranteed to lie in
/// [`RATING_RANGE`]. Out-of-range values are rejected rather than clamped,
/// since clamping would silently move a boundary score into another tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIn {
    medication_taken: bool,
    mood_rating: u8,
    sleep_quality: u8,
    physical_activity: u8,
    thoughts: String,
}

impl CheckIn {
    pub fn new(
        medication_taken: bool,
        mood_rating: i32,
        sleep_quality: i32,
        physical_activity: i32,
        thoughts: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            medication_taken,
            mood_rating: validate_rating(RatingField::MoodRating, mood_rating)?,
            sleep_quality: validate_rating(RatingField::SleepQuality, sleep_quality)?,
            physical_activity: validate_rating(RatingField::PhysicalActivity, physical_activity)?,
            thoughts: thoughts.into(),
        })
    }

    pub fn medication_taken(&self) -> bool {
        self.medication_taken
    }

    pub fn mood_rating(&self) -> u8 {
        self.mood_rating
    }

    pub fn sleep_quality(&self) -> u8 {
        self.sleep_quality
    }

    pub fn physical_activity(&self) -> u8 {
        self.physical_activity
    }

    pub fn thoughts(&self) -> &str {
        &self.thoughts
    }

    /// Mean of sleep quality and physical activity, not rounded.
    pub fn physical_average(&self) -> f64 {
        (f64::from(self.sleep_quality) + f64::from(self.physical_activity)) / 2.0
    }
}

impl TryFrom<CheckInSubmission> for CheckIn {
    type Error = CoreError;

    fn try_from(submission: CheckInSubmission) -> Result<Self, Self::Error> {
        CheckIn::new(
            submission.medication_taken,
            submission.mood_rating,
            submission.sleep_quality,
            submission.physical_activity,
            submission.thoughts,
        )
    }
}

fn validate_rating(field: RatingField, value: i32) -> Result<u8, CoreError> {
    match u8::try_from(value) {
        Ok(rating) if RATING_RANGE.contains(value) => Ok(rating),
        _ => Err(CoreError::RatingOutOfRange {
            field,
            value,
            min: RATING_RANGE.min,
            max: RATING_RANGE.max,
        }),
    }
}
