//! Chat session: transcript, session flags and the submit/deliver cycle.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

use super::transcript::MessageLog;
use crate::dispatcher::responses::{DEFAULT_QUICK_QUESTIONS, SESSION_GREETING};
use crate::dispatcher::{Response, ResponseDispatcher, ScheduledEffect};
use crate::models::{Message, Speaker};
use crate::preferences::{self, CookieConsent, PreferenceStore, Theme};

/// Flags that live for one session and reset only with a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the greeting has been shown in this session
    pub has_greeted: bool,
    pub theme: Theme,
    pub cookie_consent: Option<CookieConsent>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            has_greeted: false,
            theme: Theme::Light,
            cookie_consent: None,
        }
    }
}

impl SessionState {
    /// State for a new session, seeded from persisted preferences.
    pub fn fresh(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        Self {
            has_greeted: false,
            theme: preferences::resolve_theme(store, system_prefers_dark),
            cookie_consent: preferences::cookie_consent(store),
        }
    }

    pub fn should_show_cookie_banner(&self) -> bool {
        self.cookie_consent.is_none()
    }

    /// Runs `show` after `delay` unless a cookie choice is already saved.
    /// Abort the returned task once the visitor answers.
    pub fn schedule_cookie_banner(
        &self,
        delay: Duration,
        show: impl FnOnce() + Send + 'static,
    ) -> Option<JoinHandle<()>> {
        self.should_show_cookie_banner().then(|| {
            tokio::spawn(async move {
                sleep(delay).await;
                show();
            })
        })
    }
}

/// A classified reply that has not been shown yet.
///
/// Not `Clone`: delivering consumes it, so its effect can be handed out once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingReply {
    response: Response,
}

impl PendingReply {
    pub fn response(&self) -> &Response {
        &self.response
    }
}

/// A reply after it was appended to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub message: Message,
    /// Effect the host must now schedule
    pub effect: Option<ScheduledEffect>,
}

/// One visitor's chat.
pub struct ChatSession {
    id: Uuid,
    dispatcher: Arc<ResponseDispatcher>,
    log: MessageLog,
    state: SessionState,
    is_open: bool,
    quick_replies: Vec<String>,
}

impl ChatSession {
    pub fn new(dispatcher: Arc<ResponseDispatcher>, state: SessionState) -> Self {
        Self {
            id: Uuid::new_v4(),
            dispatcher,
            log: MessageLog::new(),
            state,
            is_open: false,
            quick_replies: default_quick_replies(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn quick_replies(&self) -> &[String] {
        &self.quick_replies
    }

    /// Opens the chat. The greeting is appended the first time only.
    pub fn open(&mut self) -> Option<&Message> {
        self.is_open = true;
        if self.state.has_greeted {
            return None;
        }
        self.state.has_greeted = true;
        info!(session = %self.id, "Greeting visitor");
        Some(self.log.append(Speaker::Bot, SESSION_GREETING))
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Records the user's message and classifies it.
    ///
    /// Empty or whitespace-only input is discarded: nothing is appended and
    /// the dispatcher is not consulted.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        let text = raw.trim();
        if text.is_empty() {
            debug!(session = %self.id, "Discarding empty input");
            return None;
        }
        self.log.append(Speaker::User, text);
        let response = self.dispatcher.classify(text);
        debug!(session = %self.id, kind = %response.kind, topic = %response.topic, "Classified input");
        Some(PendingReply { response })
    }

    /// Appends the reply and releases its effect.
    pub fn deliver(&mut self, reply: PendingReply) -> Delivered {
        let Response {
            text,
            effect,
            quick_replies,
            ..
        } = reply.response;
        self.quick_replies = if quick_replies.is_empty() {
            default_quick_replies()
        } else {
            quick_replies
        };
        let message = self.log.append(Speaker::Bot, text).clone();
        Delivered { message, effect }
    }

    /// Classifies without touching the transcript. The effect of a preview
    /// is never released.
    pub fn preview(&self, raw: &str) -> Response {
        self.dispatcher.classify(raw)
    }

    /// Appends a bot notice that did not come from the dispatcher.
    pub fn say(&mut self, text: impl Into<String>) -> &Message {
        self.log.append(Speaker::Bot, text)
    }
}

fn default_quick_replies() -> Vec<String> {
    DEFAULT_QUICK_QUESTIONS.iter().map(|s| s.to_string()).collect()
}
