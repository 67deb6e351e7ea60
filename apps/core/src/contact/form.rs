//! Submit-control state and user-visible notices for the contact form.

use serde::Serialize;
use tracing::warn;

use super::relay::RelayReceipt;
use crate::error::AppError;

pub const SENT_NOTICE: &str = "Thanks! Your message is on its way. We'll be in touch soon.";
pub const MAILTO_NOTICE: &str = "Your email client should now be open with your message.";
pub const FAILED_NOTICE: &str = "Something went wrong sending your message. Please try again.";

/// Bot lines appended to the transcript after a contact submission.
pub const MAILTO_CONFIRMATION: &str = "Thanks for your message! We've opened your email client with a pre-filled message. We'll get back to you soon.";
pub const RELAY_CONFIRMATION: &str = "Thanks for your message! The team will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Tracks whether the submit control is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    submit_enabled: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self { submit_enabled: true }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Disables the control. Returns `false` if a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.submit_enabled {
            return false;
        }
        self.submit_enabled = false;
        true
    }

    /// Re-enables the control and turns the relay result into a notice.
    pub fn finish(&mut self, result: &Result<RelayReceipt, AppError>) -> Notice {
        self.submit_enabled = true;
        match result {
            Ok(_) => Notice::success(SENT_NOTICE),
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                Notice::error(FAILED_NOTICE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_submit_is_refused() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit());
        assert!(!form.submit_enabled());
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_failure_reenables_and_reports() {
        let mut form = ContactForm::new();
        form.begin_submit();
        let notice = form.finish(&Err(AppError::Relay("down".to_string())));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FAILED_NOTICE);
        assert!(form.submit_enabled());
    }

    #[test]
    fn test_success_notice() {
        let mut form = ContactForm::new();
        form.begin_submit();
        let receipt = RelayReceipt {
            success: true,
            message: None,
        };
        let notice = form.finish(&Ok(receipt));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(form.submit_enabled());
    }
}
