//! Tone signal detection.
//!
//! Coarse style classification (hyped, casual, coarse language) used only to
//! pick topic-specific response variants. Pure regex matching, compiled once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A detected tone of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Exclamation marks or excitement words ("awesome", "let's go")
    Hyped,
    /// Slang markers ("bro", "sup", "ngl")
    Casual,
    /// Coarse language
    Coarse,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Hyped => "hyped",
            Tone::Casual => "casual",
            Tone::Coarse => "coarse",
        };
        f.write_str(label)
    }
}

// NOTE: expect() is acceptable here, the patterns are literals
static HYPED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"!").expect("Invalid regex: exclamation mark"),
        Regex::new(r"(?i)\b(awesome|amazing|incredible|sick|fire|lit|hyped|excited|stoked|pumped)\b")
            .expect("Invalid regex: hype words"),
        Regex::new(r"(?i)\b(let'?s go|lfg|can'?t wait)\b").expect("Invalid regex: hype phrases"),
    ]
});

static CASUAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(bro|bruh|dude|fam|homie|mate)\b").expect("Invalid regex: casual address"),
        Regex::new(r"(?i)\b(yo|sup|wassup|wsg)\b").expect("Invalid regex: casual greetings"),
        Regex::new(r"(?i)\b(lol|lmao|ngl|tbh|fr|idk|imo)\b").expect("Invalid regex: casual acronyms"),
        Regex::new(r"(?i)\b(gonna|wanna|gotta|kinda|ya|u|ur)\b").expect("Invalid regex: casual contractions"),
    ]
});

static COARSE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(damn|dammit|hell|crap|crappy|screw)\b").expect("Invalid regex: mild coarse words"),
        Regex::new(r"(?i)\b(shit|shitty|fuck|fucking|wtf|bs)\b").expect("Invalid regex: strong coarse words"),
        Regex::new(r"(?i)\bf\*+ck").expect("Invalid regex: masked coarse words"),
    ]
});

/// Which tones were detected in one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSignals {
    pub hyped: bool,
    pub casual: bool,
    pub coarse: bool,
}

impl ToneSignals {
    /// Detect all tone signals of a text. Signals are independent of each other.
    pub fn detect(text: &str) -> Self {
        Self {
            hyped: HYPED_PATTERNS.iter().any(|p| p.is_match(text)),
            casual: CASUAL_PATTERNS.iter().any(|p| p.is_match(text)),
            coarse: COARSE_PATTERNS.iter().any(|p| p.is_match(text)),
        }
    }

    pub fn has(&self, tone: Tone) -> bool {
        match tone {
            Tone::Hyped => self.hyped,
            Tone::Casual => self.casual,
            Tone::Coarse => self.coarse,
        }
    }

    pub fn is_neutral(&self) -> bool {
        !(self.hyped || self.casual || self.coarse)
    }
}
