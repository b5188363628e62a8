use mindpulse_core::models::check_in::CheckIn;
use mindpulse_narrative::fallback::Fallback;
use mindpulse_narrative::parse::parse_narrative;
use mindpulse_narrative::render::render_narrative;
use mindpulse_triage::triage;

#[test]
fn fallback_narratives_survive_render_and_parse() {
    for medication_taken in [true, false] {
        for mood in 1..=10 {
            for sleep in 1..=10 {
                for activity in 1..=10 {
                    let check_in =
                        CheckIn::new(medication_taken, mood, sleep, activity, "").unwrap();
                    let result = triage(&check_in);
                    let narrative = Fallback::select(result.risk_level, &result.concerns, &check_in)
                        .into_narrative(result.risk_level, &result.concerns);

                    let parsed = parse_narrative(&render_narrative(&narrative));

                    assert_eq!(parsed.message, narrative.message);
                    assert_eq!(parsed.recommendations, narrative.recommendations);
                    assert_eq!(parsed.concerns, narrative.concerns);
                    assert_eq!(parsed.risk_level, Some(narrative.risk_level));
                }
            }
        }
    }
}
