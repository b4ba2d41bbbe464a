//! Nudge templates: the reminder messages attached to each layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::NAME_PLACEHOLDER;
use crate::intent::IntentType;
use crate::models::HealthStatus;

/// Which health state a template is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NudgeTrigger {
    Yellow,
    Red,
    Any,
}

impl NudgeTrigger {
    /// A template matches a status when its trigger names it or is `any`.
    pub fn matches(self, status: HealthStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Yellow => status == HealthStatus::Yellow,
            Self::Red => status == HealthStatus::Red,
        }
    }
}

/// Tone of a styled template pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NudgeStyle {
    Direct,
    Warm,
}

/// A reminder message with the health state it is written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NudgeTemplate {
    pub trigger: NudgeTrigger,
    pub message: String,
}

impl NudgeTemplate {
    pub fn new(trigger: NudgeTrigger, message: impl Into<String>) -> Self {
        Self {
            trigger,
            message: message.into(),
        }
    }

    /// Substitute every `{name}` placeholder with the contact's name.
    pub fn render(&self, name: &str) -> String {
        self.message.replace(NAME_PLACEHOLDER, name)
    }
}

fn pool(entries: &[(NudgeTrigger, &str)]) -> Vec<NudgeTemplate> {
    entries
        .iter()
        .map(|&(trigger, message)| NudgeTemplate::new(trigger, message))
        .collect()
}

/// Base template pool for a tier. Empty for `dormant`.
///
/// `new` is templated: inside the establishment window it resolves the
/// fallback cadence and can turn yellow or red.
pub fn default_templates(intent: IntentType) -> Vec<NudgeTemplate> {
    use NudgeTrigger::*;
    match intent {
        IntentType::InnerCircle => pool(&[
            (Yellow, "It's been a little while since you talked to {name}. A quick call?"),
            (Yellow, "{name} is one of your people. Send them a message today."),
            (Red, "You haven't connected with {name} in a long time. Reach out now."),
            (Red, "{name} matters to you, and it's been too long. Call them today."),
            (Any, "Thinking of {name}? Let them know."),
        ]),
        IntentType::Nurture => pool(&[
            (Yellow, "Good moment to check in with {name}."),
            (Yellow, "{name} might enjoy hearing from you this week."),
            (Red, "It's been a while with {name}. A short note keeps things going."),
            (Any, "Share something that made you think of {name}."),
        ]),
        IntentType::Maintain => pool(&[
            (Yellow, "Time for a catch-up with {name}?"),
            (Red, "{name} hasn't heard from you in a long stretch. Say hello."),
            (Any, "A quick hello to {name} keeps the door open."),
        ]),
        IntentType::Transactional => pool(&[
            (Yellow, "Worth touching base with {name} soon."),
            (Red, "It's been months since you spoke with {name}. Check in if it still matters."),
            (Any, "Keep {name} in the loop with a short update."),
        ]),
        IntentType::New => pool(&[
            (Yellow, "You just met {name}. Follow up while it's fresh."),
            (Red, "Don't let the new connection with {name} fade. Send a note."),
            (Any, "New connections need a little momentum. Reach out to {name}."),
        ]),
        IntentType::Dormant => Vec::new(),
    }
}

/// Style-specific pools for a tier. Empty map for `dormant`.
pub fn default_styled_templates(intent: IntentType) -> BTreeMap<NudgeStyle, Vec<NudgeTemplate>> {
    use NudgeTrigger::*;
    let (direct, warm): (&[(NudgeTrigger, &str)], &[(NudgeTrigger, &str)]) = match intent {
        IntentType::InnerCircle => (
            &[
                (Yellow, "Call {name} this week."),
                (Red, "Overdue: call {name} today."),
            ],
            &[
                (Yellow, "{name} would love to hear your voice. Why not call?"),
                (Red, "You and {name} have some catching up to do. They'll be glad you called."),
            ],
        ),
        IntentType::Nurture => (
            &[
                (Yellow, "Text {name} today."),
                (Red, "Overdue: message {name}."),
            ],
            &[
                (Yellow, "Send {name} something that made you smile."),
                (Red, "It's been a while. {name} would appreciate a warm hello."),
            ],
        ),
        IntentType::Maintain => (
            &[(Any, "Ping {name}.")],
            &[(Any, "Drop {name} a friendly note.")],
        ),
        IntentType::Transactional => (
            &[(Red, "Follow up with {name}.")],
            &[(Red, "Reconnect with {name} and see how they're doing.")],
        ),
        IntentType::New => (
            &[(Yellow, "Follow up with {name} now.")],
            &[(Yellow, "Tell {name} you enjoyed meeting them.")],
        ),
        IntentType::Dormant => return BTreeMap::new(),
    };

    BTreeMap::from([
        (NudgeStyle::Direct, pool(direct)),
        (NudgeStyle::Warm, pool(warm)),
    ])
}
