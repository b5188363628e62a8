use mindpulse_core::models::risk::RiskLevel;
use mindpulse_narrative::parse::{NarrativeParser, ParserState, parse_narrative};

#[test]
fn parses_a_well_formed_reply() {
    let reply = "\
MESSAGE: It sounds like today was heavy.
You're not alone in this.

RECOMMENDATIONS:
- Call your therapist today
- Take a short walk - even ten minutes
- Text a friend tonight

KEY_CONCERNS: low_mood, poor_sleep

RISK_LEVEL: Moderate
";
    let parsed = parse_narrative(reply);

    assert_eq!(
        parsed.message,
        "It sounds like today was heavy. You're not alone in this."
    );
    assert_eq!(
        parsed.recommendations,
        vec![
            "Call your therapist today",
            "Take a short walk - even ten minutes",
            "Text a friend tonight",
        ]
    );
    assert_eq!(parsed.concerns, vec!["low_mood", "poor_sleep"]);
    assert_eq!(parsed.risk_level, Some(RiskLevel::Moderate));
    assert!(parsed.is_complete());
}

#[test]
fn bracketed_concerns_are_unwrapped() {
    let parsed = parse_narrative("KEY_CONCERNS: [missed_medication, , low_mood]");
    assert_eq!(parsed.concerns, vec!["missed_medication", "low_mood"]);
}

#[test]
fn unknown_risk_level_is_absent() {
    let parsed = parse_narrative("MESSAGE: hi\nRISK_LEVEL: critical");
    assert_eq!(parsed.risk_level, None);
    assert_eq!(parsed.message, "hi");
}

#[test]
fn garbage_yields_an_empty_result() {
    let parsed = parse_narrative("I'm sorry, I can't help with that.\n\n- a stray bullet");
    assert!(parsed.is_empty());
}

#[test]
fn missing_recommendations_leave_the_rest_intact() {
    let parsed = parse_narrative("MESSAGE: You did well today.\nKEY_CONCERNS: \nRISK_LEVEL: low");
    assert_eq!(parsed.message, "You did well today.");
    assert!(parsed.recommendations.is_empty());
    assert!(parsed.concerns.is_empty());
    assert_eq!(parsed.risk_level, Some(RiskLevel::Low));
    assert!(!parsed.is_complete());
}

#[test]
fn bare_section_words_do_not_extend_the_message() {
    let parsed = parse_narrative("MESSAGE: first\nRISK_LEVEL unknown\nsecond");
    assert_eq!(parsed.message, "first second");
}

#[test]
fn unlabelled_lines_in_recommendations_are_ignored() {
    let parsed = parse_narrative("RECOMMENDATIONS:\nHere are some ideas\n- one\n* two\n-three");
    assert_eq!(parsed.recommendations, vec!["one", "three"]);
    assert!(parsed.message.is_empty());
}

#[test]
fn indented_labels_are_recognised() {
    let parsed = parse_narrative("   MESSAGE:   padded   \n   RECOMMENDATIONS:\n   -  spaced  ");
    assert_eq!(parsed.message, "padded");
    assert_eq!(parsed.recommendations, vec!["spaced"]);
}

#[test]
fn state_transitions_follow_labels() {
    let mut parser = NarrativeParser::new();
    assert_eq!(parser.state(), ParserState::SeekingSection);

    parser.feed("MESSAGE: hello");
    assert_eq!(parser.state(), ParserState::InMessage);

    parser.feed("");
    assert_eq!(parser.state(), ParserState::InMessage);

    parser.feed("RECOMMENDATIONS:");
    assert_eq!(parser.state(), ParserState::InRecommendations);

    parser.feed("KEY_CONCERNS: low_mood");
    assert_eq!(parser.state(), ParserState::SeekingSection);

    parser.feed("stray text");
    assert_eq!(parser.state(), ParserState::SeekingSection);

    parser.feed("MESSAGE: again");
    parser.feed("RISK_LEVEL: high");
    assert_eq!(parser.state(), ParserState::SeekingSection);

    let parsed = parser.finish();
    assert_eq!(parsed.message, "again");
    assert_eq!(parsed.risk_level, Some(RiskLevel::High));
}
