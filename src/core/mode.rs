//! Assistant modes offered on the selector screen.
//!
//! Each mode selects a fixed system prompt that is prepended to the
//! conversation before it is sent to the chat-completion endpoint. The
//! write-up mode sends the conversation as-is.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssistantMode {
    WriteUp,
    SelfAssessment,
    Jigsaw,
    FeedbackOnFeedback,
    Clarification,
}

const SELF_ASSESSMENT_PROMPT: &str =
    "You are an AI self\u{2011}assessment coach. Help users reflect concisely on their work.";
const JIGSAW_PROMPT: &str =
    "You are an AI learning\u{2011}facilitator guiding a Jigsaw cooperative activity.";
const FEEDBACK_ON_FEEDBACK_PROMPT: &str =
    "You are an AI reviewer providing meta\u{2011}feedback on peer feedback quality.";
const CLARIFICATION_PROMPT: &str =
    "You help refine and clarify peer feedback by asking targeted follow\u{2011}up questions.";

impl AssistantMode {
    /// All modes in selector display order.
    pub const ALL: [AssistantMode; 5] = [
        AssistantMode::WriteUp,
        AssistantMode::SelfAssessment,
        AssistantMode::Jigsaw,
        AssistantMode::FeedbackOnFeedback,
        AssistantMode::Clarification,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AssistantMode::WriteUp => "Write-up",
            AssistantMode::SelfAssessment => "Self-assessment",
            AssistantMode::Jigsaw => "Jigsaw/cooperation",
            AssistantMode::FeedbackOnFeedback => "AI Feedback on feedback",
            AssistantMode::Clarification => "Further Clarification on peer feedback",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            AssistantMode::WriteUp => "write-up",
            AssistantMode::SelfAssessment => "self-assessment",
            AssistantMode::Jigsaw => "jigsaw",
            AssistantMode::FeedbackOnFeedback => "feedback-on-feedback",
            AssistantMode::Clarification => "clarification",
        }
    }

    /// The system prompt prepended to every request in this mode, if any.
    pub const fn system_prompt(self) -> Option<&'static str> {
        match self {
            AssistantMode::WriteUp => None,
            AssistantMode::SelfAssessment => Some(SELF_ASSESSMENT_PROMPT),
            AssistantMode::Jigsaw => Some(JIGSAW_PROMPT),
            AssistantMode::FeedbackOnFeedback => Some(FEEDBACK_ON_FEEDBACK_PROMPT),
            AssistantMode::Clarification => Some(CLARIFICATION_PROMPT),
        }
    }

    /// Position of the mode in [`AssistantMode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for AssistantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParseError {
    input: String,
}

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = AssistantMode::ALL.iter().map(|m| m.slug()).collect();
        write!(
            f,
            "unknown mode '{}' (expected one of: {})",
            self.input,
            valid.join(", ")
        )
    }
}

impl Error for ModeParseError {}

impl FromStr for AssistantMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AssistantMode::ALL
            .into_iter()
            .find(|mode| {
                mode.slug().eq_ignore_ascii_case(needle) || mode.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ModeParseError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for AssistantMode {
    type Error = ModeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssistantMode> for String {
    fn from(value: AssistantMode) -> Self {
        value.slug().to_string()
    }
}
