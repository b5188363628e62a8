//! Line-oriented parser for the narrative model's reply.
//!
//! The reply is expected to carry four labelled sections:
//!
//! ```text
//! MESSAGE: first line
//! continuation line
//!
//! RECOMMENDATIONS:
//! - one
//! - two
//!
//! KEY_CONCERNS: low_mood, poor_sleep
//! RISK_LEVEL: moderate
//! ```
//!
//! Parsing never fails. Whatever the grammar does not find is left empty
//! for the assembler to fill from fallback content.

use mindpulse_core::models::risk::RiskLevel;

const MESSAGE_LABEL: &str = "MESSAGE:";
const RECOMMENDATIONS_LABEL: &str = "RECOMMENDATIONS:";
const KEY_CONCERNS_LABEL: &str = "KEY_CONCERNS:";
const RISK_LEVEL_LABEL: &str = "RISK_LEVEL:";

/// Unlabelled lines starting with one of these never continue a message.
const SECTION_WORDS: [&str; 3] = ["RECOMMENDATIONS", "KEY_CONCERNS", "RISK_LEVEL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    SeekingSection,
    InMessage,
    InRecommendations,
}

/// What the parser recovered from a reply. Empty fields were not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNarrative {
    pub message: String,
    pub recommendations: Vec<String>,
    pub concerns: Vec<String>,
    /// `None` when the line is missing or names an unknown level.
    pub risk_level: Option<RiskLevel>,
}

impl ParsedNarrative {
    pub fn is_complete(&self) -> bool {
        !self.message.is_empty() && !self.recommendations.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
            && self.recommendations.is_empty()
            && self.concerns.is_empty()
            && self.risk_level.is_none()
    }
}

enum Line<'a> {
    Message(&'a str),
    Recommendations,
    KeyConcerns(&'a str),
    RiskLevel(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(MESSAGE_LABEL) {
            Line::Message(rest.trim())
        } else if line.starts_with(RECOMMENDATIONS_LABEL) {
            Line::Recommendations
        } else if let Some(rest) = line.strip_prefix(KEY_CONCERNS_LABEL) {
            Line::KeyConcerns(rest.trim())
        } else if let Some(rest) = line.strip_prefix(RISK_LEVEL_LABEL) {
            Line::RiskLevel(rest.trim())
        } else {
            Line::Text(line)
        }
    }
}

/// Incremental parser; feed it lines, then call [`NarrativeParser::finish`].
#[derive(Debug)]
pub struct NarrativeParser {
    state: ParserState,
    parsed: ParsedNarrative,
}

impl Default for NarrativeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NarrativeParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::SeekingSection,
            parsed: ParsedNarrative::default(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        match Line::classify(line) {
            Line::Message(rest) => {
                self.parsed.message = rest.to_string();
                self.state = ParserState::InMessage;
            }
            Line::Recommendations => {
                self.state = ParserState::InRecommendations;
            }
            Line::KeyConcerns(rest) => {
                self.parsed.concerns = parse_concern_list(rest);
                self.state = ParserState::SeekingSection;
            }
            Line::RiskLevel(rest) => {
                self.parsed.risk_level = RiskLevel::from_label(rest);
                self.state = ParserState::SeekingSection;
            }
            Line::Text(text) => self.continue_section(text),
        }
    }

    fn continue_section(&mut self, text: &str) {
        match self.state {
            ParserState::InMessage => {
                if SECTION_WORDS.iter().any(|word| text.starts_with(word)) {
                    return;
                }
                if !self.parsed.message.is_empty() {
                    self.parsed.message.push(' ');
                }
                self.parsed.message.push_str(text);
            }
            ParserState::InRecommendations => {
                if let Some(item) = text.strip_prefix('-') {
                    let item = item.trim();
                    if !item.is_empty() {
                        self.parsed.recommendations.push(item.to_string());
                    }
                }
            }
            ParserState::SeekingSection => {}
        }
    }

    pub fn finish(self) -> ParsedNarrative {
        self.parsed
    }
}

/// Parse a complete reply.
pub fn parse_narrative(text: &str) -> ParsedNarrative {
    let mut parser = NarrativeParser::new();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

fn parse_concern_list(text: &str) -> Vec<String> {
    text.trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
