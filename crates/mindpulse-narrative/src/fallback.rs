//! Deterministic narrative content used whenever the model's reply is
//! missing or incomplete.
//!
//! Every branch yields a non-empty message and exactly three
//! recommendations; the array type enforces the latter.

use mindpulse_core::models::check_in::CheckIn;
use mindpulse_core::models::concern::{ConcernSet, ConcernTag};
use mindpulse_core::models::response::{MAX_LISTED, NarrativeResponse};
use mindpulse_core::models::risk::RiskLevel;

/// Which fallback applies to a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackBranch {
    HighSevereDiscrepancy,
    High,
    ModerateDiscrepancy,
    Moderate,
    LowMissedMedication,
    LowOkay,
    LowMiddle,
    LowPositive,
}

impl FallbackBranch {
    pub const ALL: [FallbackBranch; 8] = [
        FallbackBranch::HighSevereDiscrepancy,
        FallbackBranch::High,
        FallbackBranch::ModerateDiscrepancy,
        FallbackBranch::Moderate,
        FallbackBranch::LowMissedMedication,
        FallbackBranch::LowOkay,
        FallbackBranch::LowMiddle,
        FallbackBranch::LowPositive,
    ];

    pub fn select(risk_level: RiskLevel, concerns: &ConcernSet, check_in: &CheckIn) -> Self {
        match risk_level {
            RiskLevel::High if concerns.contains(ConcernTag::SevereMoodDiscrepancy) => {
                FallbackBranch::HighSevereDiscrepancy
            }
            RiskLevel::High => FallbackBranch::High,
            RiskLevel::Moderate if concerns.contains(ConcernTag::MoodPhysicalDiscrepancy) => {
                FallbackBranch::ModerateDiscrepancy
            }
            RiskLevel::Moderate => FallbackBranch::Moderate,
            RiskLevel::Low if concerns.contains(ConcernTag::MissedMedication) => {
                FallbackBranch::LowMissedMedication
            }
            RiskLevel::Low
                if check_in.mood_rating() == 6 || concerns.contains(ConcernTag::OkayMood) =>
            {
                FallbackBranch::LowOkay
            }
            RiskLevel::Low if is_middle_of_the_road(concerns, check_in) => FallbackBranch::LowMiddle,
            RiskLevel::Low => FallbackBranch::LowPositive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FallbackBranch::HighSevereDiscrepancy => "high_severe_discrepancy",
            FallbackBranch::High => "high",
            FallbackBranch::ModerateDiscrepancy => "moderate_discrepancy",
            FallbackBranch::Moderate => "moderate",
            FallbackBranch::LowMissedMedication => "low_missed_medication",
            FallbackBranch::LowOkay => "low_okay",
            FallbackBranch::LowMiddle => "low_middle",
            FallbackBranch::LowPositive => "low_positive",
        }
    }
}

fn is_middle_of_the_road(concerns: &ConcernSet, check_in: &CheckIn) -> bool {
    concerns.contains_any(&[
        ConcernTag::MediocreMood,
        ConcernTag::MediocreSleep,
        ConcernTag::LowActivity,
    ]) || (check_in.mood_rating() <= 5 && check_in.sleep_quality() <= 5)
}

/// Concern to recommendation table for the plain moderate branch.
const MODERATE_RECOMMENDATIONS: [(&[ConcernTag], &str); 4] = [
    (
        &[ConcernTag::MissedMedication],
        "Set up medication reminders on your phone or pair it with a daily habit",
    ),
    (
        &[ConcernTag::LowMood, ConcernTag::MediocreMood],
        "Reach out to a friend, family member, or therapist for support",
    ),
    (
        &[ConcernTag::PoorSleep, ConcernTag::MediocreSleep],
        "Try a calming bedtime routine - avoid screens 30 minutes before bed",
    ),
    (
        &[ConcernTag::MinimalActivity, ConcernTag::LowActivity],
        "Start with just 10 minutes of gentle movement or a short walk",
    ),
];

/// Appended in order when fewer than three table entries apply.
const MODERATE_PADDING: [&str; 3] = [
    "Consider scheduling a check-in with your healthcare provider",
    "Jot down how you feel each day so patterns are easier to spot",
    "Pick one small, kind thing to do for yourself today",
];

/// Fallback message and recommendations for one check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub branch: FallbackBranch,
    pub message: String,
    pub recommendations: [String; 3],
}

impl Fallback {
    pub fn select(risk_level: RiskLevel, concerns: &ConcernSet, check_in: &CheckIn) -> Self {
        let branch = FallbackBranch::select(risk_level, concerns, check_in);
        let mood = check_in.mood_rating();
        let sleep = check_in.sleep_quality();
        let activity = check_in.physical_activity();

        let (message, recommendations) = match branch {
            FallbackBranch::HighSevereDiscrepancy => (
                format!(
                    "I'm noticing something important: you're taking good care of your physical \
                     health (sleep: {sleep}/10, activity: {activity}/10), but your mood is \
                     {mood}/10. When physical health is good but mood stays low, it often points \
                     to something that needs professional attention. This isn't something \
                     lifestyle changes alone can fix."
                ),
                texts([
                    "Please schedule an appointment with a mental health professional - this discrepancy is significant",
                    "If you have a therapist or psychiatrist, let them know about this pattern as soon as possible",
                    "If you're feeling unsafe or having dark thoughts, call or text 988 (Suicide & Crisis Lifeline) immediately",
                ]),
            ),
            FallbackBranch::High => (
                "I'm concerned about what you're sharing. When several parts of your wellbeing \
                 are struggling at once, especially mood, sleep, and medication, it's really \
                 important to reach out for support. You don't have to face this alone."
                    .to_string(),
                texts([
                    "Please contact your healthcare provider or therapist today - this is important",
                    "If you're feeling unsafe, call or text 988 (Suicide & Crisis Lifeline) or text HOME to 741741",
                    "Try to take your medication as prescribed - it's a crucial foundation for stability",
                ]),
            ),
            FallbackBranch::ModerateDiscrepancy => (
                format!(
                    "I notice you're keeping up good physical habits (sleep: {sleep}/10, \
                     activity: {activity}/10), but your mood is at {mood}/10. Your physical \
                     health doesn't seem to be translating into emotional wellbeing, which is \
                     worth exploring with professional support."
                ),
                texts([
                    "Consider scheduling a session with a therapist or counselor to explore what's affecting your mood",
                    "Keep track of this pattern - note when physical health is good but mood stays low",
                    "Don't dismiss your feelings just because you're 'doing everything right' - your mood matters",
                ]),
            ),
            FallbackBranch::Moderate => (
                moderate_message(concerns),
                moderate_recommendations(concerns),
            ),
            FallbackBranch::LowMissedMedication => (
                "You're doing well with your mood, sleep, and activity! I do want to gently \
                 remind you about your medication. Even when you feel good, taking it \
                 consistently helps keep that stability long-term."
                    .to_string(),
                texts([
                    "Set up a daily medication reminder to help with consistency",
                    "Pair your medication with an existing habit, like morning coffee or brushing your teeth",
                    "Keep up your self-care - it's clearly working for you",
                ]),
            ),
            FallbackBranch::LowOkay => (
                format!(
                    "You're feeling 'okay' (mood: {mood}/10), which is valid, and I wonder if \
                     there's room to feel better. You're holding steady and that's worth \
                     acknowledging. Let's look at some gentle ways to move from 'okay' to 'good'."
                ),
                texts([
                    "Reflect on what might help shift things from 'okay' to 'good' - small changes can make a difference",
                    "Notice whether 'okay' feels like a plateau or a slow decline, and trust your instincts",
                    "You deserve to feel better than just 'okay' - explore what that might look like for you",
                ]),
            ),
            FallbackBranch::LowMiddle => (
                "I hear you - things feel a bit middle-of-the-road right now. You're keeping \
                 things stable, which matters, and there's room to feel better. Let's look at \
                 some gentle ways to give your wellbeing a lift."
                    .to_string(),
                texts([
                    "Add one small positive activity today - a short walk, a call with a friend, or a hobby you enjoy",
                    "Focus on sleep quality - a consistent bedtime routine can make a big difference",
                    "Think about what might lift your mood a little - even small changes help",
                ]),
            ),
            FallbackBranch::LowPositive => (
                "It's wonderful that you're doing so well! Your mood, sleep, and activity show \
                 you're taking great care of yourself. Keep up this positive momentum!"
                    .to_string(),
                texts([
                    "Continue your current healthy routines - consistency is key",
                    "Notice what's working well and how to keep it going",
                    "Stay connected with your support system",
                ]),
            ),
        };

        Self {
            branch,
            message,
            recommendations,
        }
    }

    /// The complete narrative this fallback would display.
    pub fn into_narrative(self, risk_level: RiskLevel, concerns: &ConcernSet) -> NarrativeResponse {
        NarrativeResponse {
            message: self.message,
            recommendations: self.recommendations.into(),
            concerns: concerns.names(MAX_LISTED),
            risk_level,
        }
    }
}

fn texts(items: [&str; 3]) -> [String; 3] {
    items.map(str::to_string)
}

fn moderate_message(concerns: &ConcernSet) -> String {
    let named: Vec<String> = concerns.iter().take(2).map(ConcernTag::label).collect();
    let struggles = if named.is_empty() {
        "a few things at once".to_string()
    } else {
        named.join(" and ")
    };
    format!(
        "I notice some concerning patterns in your check-in. When we're struggling with \
         {struggles}, it can feel overwhelming. Let's focus on some concrete steps to support you."
    )
}

fn moderate_recommendations(concerns: &ConcernSet) -> [String; 3] {
    let mut picks = MODERATE_RECOMMENDATIONS
        .iter()
        .filter(|(tags, _)| concerns.contains_any(tags))
        .map(|(_, text)| *text)
        .chain(MODERATE_PADDING)
        .map(str::to_string);
    std::array::from_fn(|_| picks.next().unwrap_or_default())
}
