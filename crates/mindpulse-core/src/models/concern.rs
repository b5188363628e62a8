use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A named signal derived from one check-in dimension crossing a threshold,
/// or from a mismatch between physical and emotional indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcernTag {
    MissedMedication,
    LowMood,
    MediocreMood,
    OkayMood,
    PoorSleep,
    MediocreSleep,
    MinimalActivity,
    LowActivity,
    MoodPhysicalDiscrepancy,
    SevereMoodDiscrepancy,
}

/// How a concern tag weighs into risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernWeight {
    Critical,
    Mediocre,
    Discrepancy,
}

impl ConcernTag {
    pub const ALL: [ConcernTag; 10] = [
        ConcernTag::MissedMedication,
        ConcernTag::LowMood,
        ConcernTag::MediocreMood,
        ConcernTag::OkayMood,
        ConcernTag::PoorSleep,
        ConcernTag::MediocreSleep,
        ConcernTag::MinimalActivity,
        ConcernTag::LowActivity,
        ConcernTag::MoodPhysicalDiscrepancy,
        ConcernTag::SevereMoodDiscrepancy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConcernTag::MissedMedication => "missed_medication",
            ConcernTag::LowMood => "low_mood",
            ConcernTag::MediocreMood => "mediocre_mood",
            ConcernTag::OkayMood => "okay_mood",
            ConcernTag::PoorSleep => "poor_sleep",
            ConcernTag::MediocreSleep => "mediocre_sleep",
            ConcernTag::MinimalActivity => "minimal_activity",
            ConcernTag::LowActivity => "low_activity",
            ConcernTag::MoodPhysicalDiscrepancy => "mood_physical_discrepancy",
            ConcernTag::SevereMoodDiscrepancy => "severe_mood_discrepancy",
        }
    }

    /// Human-readable form: the tag with underscores replaced by spaces.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn weight(self) -> ConcernWeight {
        match self {
            ConcernTag::MissedMedication
            | ConcernTag::LowMood
            | ConcernTag::PoorSleep
            | ConcernTag::MinimalActivity => ConcernWeight::Critical,
            ConcernTag::MediocreMood
            | ConcernTag::MediocreSleep
            | ConcernTag::LowActivity
            | ConcernTag::OkayMood => ConcernWeight::Mediocre,
            ConcernTag::MoodPhysicalDiscrepancy | ConcernTag::SevereMoodDiscrepancy => {
                ConcernWeight::Discrepancy
            }
        }
    }

    pub fn is_critical(self) -> bool {
        self.weight() == ConcernWeight::Critical
    }

    pub fn is_mediocre(self) -> bool {
        self.weight() == ConcernWeight::Mediocre
    }

    pub fn is_discrepancy(self) -> bool {
        self.weight() == ConcernWeight::Discrepancy
    }
}

impl fmt::Display for ConcernTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcernTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ConcernTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownConcern(s.to_string()))
    }
}

/// An ordered, duplicate-free set of concern tags.
///
/// Built once per check-in via [`FromIterator`] and never mutated afterwards.
/// Order follows insertion and only matters when a caller keeps the first few.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcernSet(Vec<ConcernTag>);

impl ConcernSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: ConcernTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn contains_any(&self, tags: &[ConcernTag]) -> bool {
        tags.iter().any(|tag| self.contains(*tag))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConcernTag> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ConcernTag] {
        &self.0
    }

    pub fn critical_count(&self) -> usize {
        self.iter().filter(|tag| tag.is_critical()).count()
    }

    pub fn has_discrepancy(&self) -> bool {
        self.iter().any(ConcernTag::is_discrepancy)
    }

    /// Tag names in insertion order, keeping at most `limit`.
    pub fn names(&self, limit: usize) -> Vec<String> {
        self.iter().take(limit).map(|tag| tag.as_str().to_string()).collect()
    }
}

impl FromIterator<ConcernTag> for ConcernSet {
    fn from_iter<I: IntoIterator<Item = ConcernTag>>(iter: I) -> Self {
        let mut tags = Vec::new();
        for tag in iter {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self(tags)
    }
}

impl<'a> IntoIterator for &'a ConcernSet {
    type Item = &'a ConcernTag;
    type IntoIter = std::slice::Iter<'a, ConcernTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ConcernSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        let joined = self.iter().map(ConcernTag::as_str).collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}
