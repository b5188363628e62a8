use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

use crate::bands::{first_band, Band, Dimension};
use crate::Detector;

/// 1-3: low, 4-5: mediocre, exactly 6: "just okay". 7+ raises nothing.
pub const MOOD_BANDS: [Band; 3] = [
    Band {
        upper: 3,
        tag: ConcernTag::LowMood,
    },
    Band {
        upper: 5,
        tag: ConcernTag::MediocreMood,
    },
    Band {
        upper: 6,
        tag: ConcernTag::OkayMood,
    },
];

pub struct MoodDetector;

impl Detector for MoodDetector {
    fn id(&self) -> &str {
        "mood"
    }

    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag> {
        first_band(&MOOD_BANDS, Dimension::Mood.rating(check_in))
            .into_iter()
            .collect()
    }
}
