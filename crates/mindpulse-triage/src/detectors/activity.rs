use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

use crate::bands::{first_band, Band, Dimension};
use crate::Detector;

/// 1-2: minimal, 3-5: low.
pub const ACTIVITY_BANDS: [Band; 2] = [
    Band {
        upper: 2,
        tag: ConcernTag::MinimalActivity,
    },
    Band {
        upper: 5,
        tag: ConcernTag::LowActivity,
    },
];

pub struct ActivityDetector;

impl Detector for ActivityDetector {
    fn id(&self) -> &str {
        "activity"
    }

    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag> {
        first_band(&ACTIVITY_BANDS, Dimension::Activity.rating(check_in))
            .into_iter()
            .collect()
    }
}
