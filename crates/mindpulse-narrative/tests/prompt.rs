use mindpulse_core::models::check_in::CheckIn;
use mindpulse_narrative::prompt::{mood_band, render_survey_prompt};
use mindpulse_triage::triage;

#[test]
fn prompt_carries_risk_concerns_and_ratings() {
    let check_in = CheckIn::new(false, 2, 6, 5, "Everything feels pointless").unwrap();
    let prompt = render_survey_prompt(&check_in, &triage(&check_in)).unwrap();

    assert!(prompt.contains("CALCULATED RISK LEVEL: HIGH"));
    assert!(prompt.contains("IDENTIFIED CONCERNS: missed_medication, low_mood, low_activity"));
    assert!(prompt.contains("- Medication: MISSED (concerning)"));
    assert!(prompt.contains("- Mood: 2/10 (CRITICAL - very low)"));
    assert!(prompt.contains("\"Everything feels pointless\""));
    assert!(prompt.contains("TONE: serious"));
    assert!(prompt.contains("RISK_LEVEL: high"));
    assert!(!prompt.contains("DISCREPANCY DETECTED"));
}

#[test]
fn prompt_flags_discrepancies() {
    let check_in = CheckIn::new(true, 5, 8, 8, "").unwrap();
    let prompt = render_survey_prompt(&check_in, &triage(&check_in)).unwrap();
    assert!(prompt.contains("\nDISCREPANCY DETECTED:"));
    assert!(prompt.contains("TONE: concerned"));

    let check_in = CheckIn::new(true, 4, 7, 5, "").unwrap();
    let prompt = render_survey_prompt(&check_in, &triage(&check_in)).unwrap();
    assert!(prompt.contains("SEVERE DISCREPANCY DETECTED:"));
}

#[test]
fn prompt_is_deterministic() {
    let check_in = CheckIn::new(true, 8, 8, 7, "Good day {{ not a tag }}").unwrap();
    let first = render_survey_prompt(&check_in, &triage(&check_in)).unwrap();
    let second = render_survey_prompt(&check_in, &triage(&check_in)).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("IDENTIFIED CONCERNS: None"));
    assert!(first.contains("{{ not a tag }}"));
}

#[test]
fn mood_bands() {
    assert_eq!(mood_band(3), "CRITICAL - very low");
    assert_eq!(mood_band(5), "concerning - low");
    assert_eq!(mood_band(6), "mediocre - just okay");
    assert_eq!(mood_band(7), "stable");
    assert_eq!(mood_band(9), "good");
}
