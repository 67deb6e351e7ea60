//! Topics and rule kinds a response can be tagged with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject area a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Pricing,
    Demo,
    Contact,
    Portfolio,
    TechStack,
    Services,
    Timeline,
    Process,
    Team,
    Greeting,
    Thanks,
    Why,
    When,
    Where,
    Payment,
    Guarantee,
    Experience,
    Start,
    Urgent,
    Comparison,
    /// Interrogative input nothing else recognised
    Question,
    /// Help menu shown when nothing matched
    Help,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    /// Returns a human-readable label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Pricing => "pricing",
            Topic::Demo => "demo",
            Topic::Contact => "contact",
            Topic::Portfolio => "portfolio",
            Topic::TechStack => "tech_stack",
            Topic::Services => "services",
            Topic::Timeline => "timeline",
            Topic::Process => "process",
            Topic::Team => "team",
            Topic::Greeting => "greeting",
            Topic::Thanks => "thanks",
            Topic::Why => "why",
            Topic::When => "when",
            Topic::Where => "where",
            Topic::Payment => "payment",
            Topic::Guarantee => "guarantee",
            Topic::Experience => "experience",
            Topic::Start => "start",
            Topic::Urgent => "urgent",
            Topic::Comparison => "comparison",
            Topic::Question => "question",
            Topic::Help => "help",
        }
    }
}

/// Tier of the rule table a response came from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    NumericShortcut,
    ToneCompound,
    Topic,
    Question,
    Default,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RuleKind::NumericShortcut => "numeric_shortcut",
            RuleKind::ToneCompound => "tone_compound",
            RuleKind::Topic => "topic",
            RuleKind::Question => "question",
            RuleKind::Default => "default",
        };
        f.write_str(label)
    }
}
