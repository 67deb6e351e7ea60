use tokio::sync::oneshot;

use crate::chat::PendingReply;
use crate::contact::{Notice, RelayReceipt};
use crate::dispatcher::Response;
use crate::error::AppError;
use crate::models::{ContactSubmission, Message};
use crate::preferences::{CookieConsent, Theme};

/// Messages that can be sent to the `ChatActor`.
#[derive(Debug)]
pub enum ChatCommand {
    /// The visitor opened the chat widget.
    Open {
        /// Receives the greeting, if this was the first open of the session.
        responder: oneshot::Sender<Option<Message>>,
    },
    /// The visitor closed the chat widget.
    Close,
    /// The visitor submitted text.
    Submit {
        text: String,
        /// Receives the bot reply once delivered, or `None` for empty input.
        responder: oneshot::Sender<Result<Option<Message>, AppError>>,
    },
    /// A classified reply whose typing delay elapsed. Sent by the actor to itself.
    Deliver {
        reply: PendingReply,
        responder: oneshot::Sender<Result<Option<Message>, AppError>>,
    },
    /// Classify without recording anything or firing effects.
    Preview {
        text: String,
        responder: oneshot::Sender<Response>,
    },
    /// A snapshot of the transcript.
    Transcript {
        responder: oneshot::Sender<Vec<Message>>,
    },
    /// The visitor sent the contact form.
    SubmitContact {
        submission: ContactSubmission,
        responder: oneshot::Sender<Result<Notice, AppError>>,
    },
    /// The relay answered a contact submission. Sent by the actor to itself.
    ContactFinished {
        result: Result<RelayReceipt, AppError>,
        responder: oneshot::Sender<Result<Notice, AppError>>,
    },
    /// The visitor pressed the theme toggle.
    ToggleTheme {
        responder: oneshot::Sender<Result<Theme, AppError>>,
    },
    /// The visitor answered the cookie banner.
    RecordConsent {
        choice: CookieConsent,
        responder: oneshot::Sender<Result<(), AppError>>,
    },
    /// A command to stop the actor.
    Shutdown,
}
