use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

use crate::bands::{first_band, Band, Dimension};
use crate::Detector;

/// 1-3: poor, 4-5: mediocre.
pub const SLEEP_BANDS: [Band; 2] = [
    Band {
        upper: 3,
        tag: ConcernTag::PoorSleep,
    },
    Band {
        upper: 5,
        tag: ConcernTag::MediocreSleep,
    },
];

pub struct SleepDetector;

impl Detector for SleepDetector {
    fn id(&self) -> &str {
        "sleep"
    }

    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag> {
        first_band(&SLEEP_BANDS, Dimension::Sleep.rating(check_in))
            .into_iter()
            .collect()
    }
}
