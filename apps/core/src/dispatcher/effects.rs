//! Side effects a response can request from the host page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Delay before a navigation fires, so the message can be read first.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(500);
/// Delay before the page scrolls to a section.
pub const SCROLL_DELAY: Duration = Duration::from_millis(800);
/// Delay before the contact modal opens.
pub const CONTACT_FORM_DELAY: Duration = Duration::from_millis(1000);

/// A host-page action requested by a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffect {
    /// Change location to a relative path
    Navigate { path: String },
    /// Bring a named section into view
    ScrollTo { section_id: String },
    /// Reveal the page's existing contact modal
    OpenContactForm,
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideEffect::Navigate { path } => write!(f, "navigate({})", path),
            SideEffect::ScrollTo { section_id } => write!(f, "scroll_to({})", section_id),
            SideEffect::OpenContactForm => f.write_str("open_contact_form"),
        }
    }
}

/// A side effect paired with the fixed delay after which it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    pub effect: SideEffect,
    pub delay: Duration,
}

impl ScheduledEffect {
    pub fn navigate(path: impl Into<String>) -> Self {
        Self {
            effect: SideEffect::Navigate { path: path.into() },
            delay: NAVIGATE_DELAY,
        }
    }

    pub fn scroll_to(section_id: impl Into<String>) -> Self {
        Self {
            effect: SideEffect::ScrollTo {
                section_id: section_id.into(),
            },
            delay: SCROLL_DELAY,
        }
    }

    pub fn open_contact_form() -> Self {
        Self {
            effect: SideEffect::OpenContactForm,
            delay: CONTACT_FORM_DELAY,
        }
    }
}
