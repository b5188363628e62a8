use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

/// A check-in dimension rated on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mood,
    Sleep,
    Activity,
}

impl Dimension {
    pub fn rating(self, check_in: &CheckIn) -> u8 {
        match self {
            Dimension::Mood => check_in.mood_rating(),
            Dimension::Sleep => check_in.sleep_quality(),
            Dimension::Activity => check_in.physical_activity(),
        }
    }
}

/// A rating band: any rating at or below `upper` raises `tag`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub upper: u8,
    pub tag: ConcernTag,
}

/// Find the first band a rating falls into.
///
/// Bands are listed from most to least severe, so bands within a dimension
/// are mutually exclusive.
pub fn first_band(bands: &[Band], rating: u8) -> Option<ConcernTag> {
    bands.iter().find(|band| rating <= band.upper).map(|band| band.tag)
}
