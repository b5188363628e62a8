//! Exhaustive checks over every valid check-in.

use mindpulse_core::models::check_in::CheckIn;
use mindpulse_triage::triage;

fn lattice() -> impl Iterator<Item = (bool, i32, i32, i32)> {
    [true, false].into_iter().flat_map(|med| {
        (1..=10).flat_map(move |mood| {
            (1..=10).flat_map(move |sleep| (1..=10).map(move |activity| (med, mood, sleep, activity)))
        })
    })
}

#[test]
fn lowering_mood_never_lowers_risk() {
    for (med, mood, sleep, activity) in lattice().filter(|(_, mood, _, _)| *mood > 1) {
        let higher = triage(&CheckIn::new(med, mood, sleep, activity, "").unwrap());
        let lower = triage(&CheckIn::new(med, mood - 1, sleep, activity, "").unwrap());
        assert!(
            lower.risk_level >= higher.risk_level,
            "mood {mood} -> {} lowered risk (med={med}, sleep={sleep}, activity={activity})",
            mood - 1
        );
    }
}

#[test]
fn triage_is_total_and_repeatable() {
    for (med, mood, sleep, activity) in lattice() {
        let input = CheckIn::new(med, mood, sleep, activity, "").unwrap();
        assert_eq!(triage(&input), triage(&input));
    }
}

#[test]
fn at_most_one_tag_per_rated_dimension() {
    for (med, mood, sleep, activity) in lattice() {
        let concerns = triage(&CheckIn::new(med, mood, sleep, activity, "").unwrap()).concerns;
        let banded = concerns.iter().filter(|t| !t.is_discrepancy()).count();
        let expected_max = 3 + usize::from(!med);
        assert!(banded <= expected_max);
    }
}
