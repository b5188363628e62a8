use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

use crate::Detector;

/// Physical average at which an okay-or-worse mood counts as a mismatch.
pub const DISCREPANCY_PHYSICAL_MIN: f64 = 7.0;
/// Highest mood that still counts as a mismatch.
pub const DISCREPANCY_MOOD_MAX: u8 = 6;
/// Physical average at which a low mood counts as a severe mismatch.
pub const SEVERE_PHYSICAL_MIN: f64 = 6.0;
/// Highest mood that still counts as a severe mismatch.
pub const SEVERE_MOOD_MAX: u8 = 4;

/// Good physical self-care paired with persistently low mood.
///
/// Both tags may fire for the same check-in; the severe tag never
/// suppresses the plain one.
pub struct DiscrepancyDetector;

impl Detector for DiscrepancyDetector {
    fn id(&self) -> &str {
        "discrepancy"
    }

    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag> {
        let physical_avg = check_in.physical_average();
        let mood = check_in.mood_rating();
        let mut tags = Vec::new();

        if physical_avg >= DISCREPANCY_PHYSICAL_MIN && mood <= DISCREPANCY_MOOD_MAX {
            tags.push(ConcernTag::MoodPhysicalDiscrepancy);
        }

        if physical_avg >= SEVERE_PHYSICAL_MIN && mood <= SEVERE_MOOD_MAX {
            tags.push(ConcernTag::SevereMoodDiscrepancy);
        }

        tags
    }
}
