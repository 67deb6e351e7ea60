use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Short avatar label shown next to a message.
    pub fn avatar(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }
}

/// Represents a single line of the chat transcript.
///
/// Created by the message log only; never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Cosmetic unique identifier.
    pub id: Uuid,
    /// Creation order within the transcript, starting at 0.
    pub seq: u64,
    /// The author of the message.
    pub speaker: Speaker,
    /// Plain text content, unescaped.
    pub text: String,
    /// Wall-clock time the message was appended.
    pub created_at: DateTime<Utc>,
}

/// A contact request typed into the chat's contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    /// The visitor's name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Reply-to address.
    #[validate(email)]
    pub email: String,
    /// The question or project description.
    #[validate(length(min = 1, max = 5000))]
    pub question: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            question: question.into().trim().to_string(),
        }
    }
}
