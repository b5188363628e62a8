//! Prompts sent to the narrative model.
//!
//! The system prompts are fixed text. The survey prompt is a Tera template
//! rendered from the triage result, so the same check-in always produces
//! the same prompt.

use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::ConcernTag;
use mindpulse_triage::Triage;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::NarrativeError;

/// System prompt for check-in analysis.
pub const SURVEY_SYSTEM_PROMPT: &str = "\
You are a compassionate mental health support assistant. You are skilled at \
reading mental health indicators, recommending evidence-based next steps, \
recognising when a situation needs escalation, and communicating without \
judgement.

GUIDELINES:
1. Be accurate and specific. Do not minimise serious concerns.
2. Match your tone to the severity level. Do not sound cheerful about a concerning check-in.
3. Give actionable, evidence-based recommendations.
4. Acknowledge the specific issues the person mentions.
5. Notice when physical health indicators do not match emotional state.
6. Never be upbeat when mood is low, even if sleep and activity are good.

SEVERITY:
- LOW: everything genuinely good (mood 7-10, sleep 7-10, activity 6-10)
- MODERATE: several mediocre factors, good sleep and activity with mood 4-6, \
one or two critical concerns, or missed medication alongside other issues
- HIGH: missed medication with mood 3 or below, three or more critical \
factors, or excellent sleep and activity with mood 4 or below

SCORES:
- 8-10: excellent, celebrate and reinforce
- 6-7: stable, acknowledge but watch for discrepancies
- 5-6: okay, acknowledge honestly and validate feeling stuck
- 3-4: concerning, offer support and concrete steps
- 1-2: critical, point to immediate help and crisis resources

DISCREPANCIES:
Sleep and activity at 7 or above with mood at 6 or below is a red flag. Good \
physical habits are not resolving something emotional, which may point to \
depression, anxiety or another condition. Respond with concern and recommend \
professional evaluation.

\"OKAY\" FEELINGS:
Do not dismiss a 5-6 mood with platitudes. Okay is valid but not the goal; \
gently explore whether it is a plateau or a slow decline.";

/// System prompt for free-form conversation.
pub const COUNSELOR_SYSTEM_PROMPT: &str = "\
You are a compassionate mental health support assistant for MindPulse. Offer \
empathetic, evidence-based guidance to people looking for support.

- Listen actively and validate feelings.
- Stay supportive and non-judgemental, and use person-first language.
- Recommend professional help when a concern is serious.
- Never diagnose or prescribe.
- If someone mentions suicidal thoughts, give crisis resources right away: \
call or text 988 (Suicide & Crisis Lifeline) or text HOME to 741741.

Tone: warm, professional and hopeful. Be concise but thorough.";

const SURVEY_TEMPLATE_NAME: &str = "survey_prompt.txt";

const SURVEY_TEMPLATE: &str = r#"A person has completed their daily mental health check-in.

CALCULATED RISK LEVEL: {{ risk_level | upper }}
IDENTIFIED CONCERNS: {{ concerns }}
{% if discrepancy == "plain" %}
DISCREPANCY DETECTED:
Sleep ({{ sleep }}) and activity ({{ activity }}) are much better than mood ({{ mood }}).
Lifestyle alone does not seem to be resolving how this person feels; professional support may be needed.
{% elif discrepancy == "severe" %}
SEVERE DISCREPANCY DETECTED:
Despite adequate sleep ({{ sleep }}) and activity ({{ activity }}), mood is very low ({{ mood }}).
This is a red flag for depression or another condition that needs professional evaluation.
{% endif %}
ASSESSMENT:
- Medication: {{ medication }}
- Mood: {{ mood }}/10 ({{ mood_band }})
- Sleep: {{ sleep }}/10 ({{ sleep_band }})
- Activity: {{ activity }}/10 ({{ activity_band }})

THEIR THOUGHTS:
"{{ thoughts }}"
{% if risk_level == "high" %}
TONE: serious, supportive and directive.
- This person needs support now. Focus on safety, professional help and crisis resources.
- Be warm but do not minimise what they are going through.
- Make clear they should not face this alone and give immediate steps.
{% elif risk_level == "moderate" %}
TONE: concerned, empathetic and constructive.
- Acknowledge the specific struggles without being alarmist.
- Balance concern with hope and give concrete steps.
- Suggest professional support if the pattern continues.
{% else %}
TONE: positive and encouraging.
- Reinforce healthy habits and continued self-care.
- Offer tips for staying well.
{% endif %}
YOUR TASK:
1. A message of 2-4 sentences that speaks to their actual situation.
2. Three specific, achievable recommendations based on the concerns above.
3. The key concerns that actually apply.

FORMAT YOUR RESPONSE EXACTLY AS:
MESSAGE: <message>

RECOMMENDATIONS:
- <recommendation 1>
- <recommendation 2>
- <recommendation 3>

KEY_CONCERNS: concern1, concern2, concern3

RISK_LEVEL: {{ risk_level }}

List KEY_CONCERNS as plain comma-separated values without brackets."#;

#[derive(Debug, Serialize)]
struct SurveyPromptContext<'a> {
    risk_level: &'static str,
    concerns: String,
    discrepancy: Option<&'static str>,
    medication: &'static str,
    mood: u8,
    mood_band: &'static str,
    sleep: u8,
    sleep_band: &'static str,
    activity: u8,
    activity_band: &'static str,
    thoughts: &'a str,
}

/// Render the user prompt for a triaged check-in.
pub fn render_survey_prompt(check_in: &CheckIn, triage: &Triage) -> Result<String, NarrativeError> {
    let concerns = if triage.concerns.is_empty() {
        "None".to_string()
    } else {
        triage.concerns.to_string()
    };

    // A check-in can carry both discrepancy tags; the plain one is reported.
    let discrepancy = if triage.concerns.contains(ConcernTag::MoodPhysicalDiscrepancy) {
        Some("plain")
    } else if triage.concerns.contains(ConcernTag::SevereMoodDiscrepancy) {
        Some("severe")
    } else {
        None
    };

    let prompt_context = SurveyPromptContext {
        risk_level: triage.risk_level.as_str(),
        concerns,
        discrepancy,
        medication: if check_in.medication_taken() {
            "taken"
        } else {
            "MISSED (concerning)"
        },
        mood: check_in.mood_rating(),
        mood_band: mood_band(check_in.mood_rating()),
        sleep: check_in.sleep_quality(),
        sleep_band: sleep_band(check_in.sleep_quality()),
        activity: check_in.physical_activity(),
        activity_band: activity_band(check_in.physical_activity()),
        thoughts: check_in.thoughts(),
    };

    let mut tera = Tera::default();
    tera.add_raw_template(SURVEY_TEMPLATE_NAME, SURVEY_TEMPLATE)
        .map_err(|e| NarrativeError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(&prompt_context)?;
    let context =
        Context::from_value(value).map_err(|e| NarrativeError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(SURVEY_TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

pub fn mood_band(rating: u8) -> &'static str {
    match rating {
        0..=3 => "CRITICAL - very low",
        4..=5 => "concerning - low",
        6 => "mediocre - just okay",
        7 => "stable",
        _ => "good",
    }
}

pub fn sleep_band(rating: u8) -> &'static str {
    match rating {
        0..=3 => "CRITICAL - very poor",
        4..=5 => "concerning",
        6 => "mediocre - just okay",
        7 => "stable",
        _ => "good",
    }
}

pub fn activity_band(rating: u8) -> &'static str {
    match rating {
        0..=2 => "CRITICAL - minimal",
        3..=5 => "low",
        6 => "mediocre - just okay",
        7 => "moderate",
        _ => "good",
    }
}
