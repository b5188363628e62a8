use mindpulse_core::models::response::NarrativeResponse;

/// Render a narrative in the labelled layout the model is asked to use.
///
/// [`crate::parse::parse_narrative`] recovers the same narrative from this
/// output as long as the message is a single line.
pub fn render_narrative(narrative: &NarrativeResponse) -> String {
    let mut out = format!("MESSAGE: {}\n\nRECOMMENDATIONS:\n", narrative.message);
    for recommendation in &narrative.recommendations {
        out.push_str("- ");
        out.push_str(recommendation);
        out.push('\n');
    }
    out.push_str("\nKEY_CONCERNS: ");
    out.push_str(&narrative.concerns.join(", "));
    out.push_str("\n\nRISK_LEVEL: ");
    out.push_str(narrative.risk_level.as_str());
    out.push('\n');
    out
}
