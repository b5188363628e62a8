use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;

use crate::Detector;

/// Medication adherence. Any missed dose is a critical concern.
pub struct MedicationDetector;

impl Detector for MedicationDetector {
    fn id(&self) -> &str {
        "medication"
    }

    fn detect(&self, check_in: &CheckIn) -> Vec<ConcernTag> {
        if check_in.medication_taken() {
            Vec::new()
        } else {
            vec![ConcernTag::MissedMedication]
        }
    }
}
