//! End-to-end check-in analysis.

use mindpulse_core::models::alert::AlertDecision;
use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::response::SurveyResponse;
use mindpulse_triage::{Triage, alert, triage};
use tracing::{info, warn};

use crate::assemble::assemble;
use crate::generator::NarrativeGenerator;
use crate::parse::{ParsedNarrative, parse_narrative};
use crate::prompt::{SURVEY_SYSTEM_PROMPT, render_survey_prompt};

/// Where the displayed narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeSource {
    /// The model's reply supplied both message and recommendations.
    Generated,
    /// The model replied but fallback content filled a gap.
    Partial,
    /// The model produced nothing usable.
    Fallback,
}

impl NarrativeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            NarrativeSource::Generated => "generated",
            NarrativeSource::Partial => "partial",
            NarrativeSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SurveyOutcome {
    pub response: SurveyResponse,
    pub triage: Triage,
    pub alert: AlertDecision,
    pub source: NarrativeSource,
}

/// Triage a check-in, decide on alerting, then ask the generator for a
/// narrative.
pub async fn analyze_survey<G>(check_in: &CheckIn, generator: &G) -> SurveyOutcome
where
    G: NarrativeGenerator + ?Sized,
{
    analyze_survey_with_alert(check_in, generator, |_| {}).await
}

/// Like [`analyze_survey`], handing the alert decision to `on_alert` before
/// the generator is called.
///
/// Nothing the generator does can change or delay the decision.
pub async fn analyze_survey_with_alert<G, F>(
    check_in: &CheckIn,
    generator: &G,
    on_alert: F,
) -> SurveyOutcome
where
    G: NarrativeGenerator + ?Sized,
    F: FnOnce(&AlertDecision),
{
    let triage = triage(check_in);
    let alert = alert::evaluate_with(check_in, &triage);
    on_alert(&alert);

    let parsed = match request_narrative(check_in, &triage, generator).await {
        Some(reply) => parse_narrative(&reply),
        None => ParsedNarrative::default(),
    };

    let source = if parsed.is_complete() {
        NarrativeSource::Generated
    } else if parsed.is_empty() {
        NarrativeSource::Fallback
    } else {
        NarrativeSource::Partial
    };

    let response = assemble(parsed, &triage, check_in, &alert);

    info!(
        risk = %triage.risk_level,
        concerns = %triage.concerns,
        provider_contacted = alert.should_alert,
        source = source.as_str(),
        "check-in analyzed"
    );

    SurveyOutcome {
        response,
        triage,
        alert,
        source,
    }
}

async fn request_narrative<G>(check_in: &CheckIn, triage: &Triage, generator: &G) -> Option<String>
where
    G: NarrativeGenerator + ?Sized,
{
    let user_prompt = match render_survey_prompt(check_in, triage) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!(error = %e, "survey prompt rendering failed, using fallback");
            return None;
        }
    };

    match generator.generate(SURVEY_SYSTEM_PROMPT, &user_prompt).await {
        Ok(reply) => Some(reply),
        Err(e) => {
            warn!(error = %e, "narrative generation failed, using fallback");
            None
        }
    }
}
