use crate::actors::effects::EffectScheduler;
use crate::actors::messages::ChatCommand;
use crate::actors::traits::{ContactRelay, HostPage};
use crate::chat::ChatSession;
use crate::contact::form::{MAILTO_CONFIRMATION, MAILTO_NOTICE, RELAY_CONFIRMATION};
use crate::contact::{mailto_link, ContactForm, Notice, RELAY_TIMEOUT};
use crate::dispatcher::Response;
use crate::error::AppError;
use crate::models::{ContactSubmission, Message};
use crate::preferences::{self, CookieConsent, PreferenceStore, Theme};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, timeout, Duration, Instant};
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

/// Delay before a bot reply appears, so it reads as typed.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(500);
/// Longest typing delay a handle can wait out before `REPLY_TIMEOUT` hits.
pub const MAX_TYPING_DELAY: Duration = Duration::from_secs(10);

/// How long a handle waits for the actor to answer a request.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

/// Where contact-form submissions go.
#[derive(Clone)]
pub enum ContactChannel {
    /// Open the visitor's mail client addressed to `recipient`
    Mailto { recipient: String },
    /// Post to a form relay
    Relay(Arc<dyn ContactRelay>),
}

/// Runtime knobs of the chat actor.
#[derive(Clone)]
pub struct ChatSettings {
    pub typing_delay: Duration,
    pub contact: ContactChannel,
    /// Bound on one relay submission; must stay below `REPLY_TIMEOUT`.
    pub relay_timeout: Duration,
}

impl ChatSettings {
    pub fn new(typing_delay: Duration, contact: ContactChannel) -> Self {
        Self {
            typing_delay,
            contact,
            relay_timeout: RELAY_TIMEOUT,
        }
    }
}

/// A handle to the `ChatActor`.
///
/// The actor owns one `ChatSession` and processes commands one at a time,
/// like a UI event loop. Bot replies and side effects are scheduled on
/// timers; nothing inside the actor sleeps.
#[derive(Clone)]
pub struct ChatHandle {
    sender: mpsc::Sender<ChatCommand>,
}

impl ChatHandle {
    /// Spawns the actor for `session` and returns a handle to it.
    pub fn spawn<H: HostPage>(
        session: ChatSession,
        host: Arc<H>,
        store: Box<dyn PreferenceStore>,
        settings: ChatSettings,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let (typing, typing_queue) = mpsc::unbounded_channel();
        tokio::spawn(run_typing_queue(typing_queue, sender.downgrade()));
        let runner = ChatRunner {
            receiver,
            self_sender: sender.downgrade(),
            typing,
            session,
            scheduler: EffectScheduler::new(host),
            store,
            settings,
            form: ContactForm::new(),
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> ChatCommand,
    ) -> Result<T, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender.send(make(send)).await?;
        Ok(timeout(REPLY_TIMEOUT, recv).await??)
    }

    /// Opens the widget. Returns the greeting the first time in a session.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<Option<Message>, AppError> {
        self.request(|responder| ChatCommand::Open { responder }).await
    }

    pub async fn close(&self) -> Result<(), AppError> {
        self.sender.send(ChatCommand::Close).await?;
        Ok(())
    }

    /// Submits visitor text and waits for the delivered bot reply.
    ///
    /// Returns `Ok(None)` for empty input, which is discarded.
    #[instrument(skip(self))]
    pub async fn submit(&self, text: impl Into<String> + std::fmt::Debug) -> Result<Option<Message>, AppError> {
        let text = text.into();
        self.request(|responder| ChatCommand::Submit { text, responder })
            .await?
    }

    /// Dry-run classification: nothing is recorded and no effect fires.
    pub async fn preview(&self, text: impl Into<String>) -> Result<Response, AppError> {
        let text = text.into();
        self.request(|responder| ChatCommand::Preview { text, responder })
            .await
    }

    pub async fn transcript(&self) -> Result<Vec<Message>, AppError> {
        self.request(|responder| ChatCommand::Transcript { responder })
            .await
    }

    /// Sends the contact form. Relay failures come back as an error notice,
    /// not as `Err`.
    #[instrument(skip(self, submission))]
    pub async fn submit_contact(&self, submission: ContactSubmission) -> Result<Notice, AppError> {
        self.request(|responder| ChatCommand::SubmitContact {
            submission,
            responder,
        })
        .await?
    }

    pub async fn toggle_theme(&self) -> Result<Theme, AppError> {
        self.request(|responder| ChatCommand::ToggleTheme { responder })
            .await?
    }

    pub async fn record_consent(&self, choice: CookieConsent) -> Result<(), AppError> {
        self.request(|responder| ChatCommand::RecordConsent { choice, responder })
            .await?
    }

    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender.send(ChatCommand::Shutdown).await?;
        Ok(())
    }
}

// --- Actor Runner ---
struct ChatRunner<H: HostPage> {
    receiver: mpsc::Receiver<ChatCommand>,
    self_sender: mpsc::WeakSender<ChatCommand>,
    typing: mpsc::UnboundedSender<(Instant, ChatCommand)>,
    session: ChatSession,
    scheduler: EffectScheduler<H>,
    store: Box<dyn PreferenceStore>,
    settings: ChatSettings,
    form: ContactForm,
}

impl<H: HostPage> ChatRunner<H> {
    async fn run(mut self) {
        info!(session = %self.session.id(), "Chat actor started");
        while let Some(cmd) = self.receiver.recv().await {
            if matches!(cmd, ChatCommand::Shutdown) {
                break;
            }
            self.handle_command(cmd);
        }
        info!(session = %self.session.id(), "Chat actor stopped");
    }

    /// Queues `cmd` to come back to this actor after the typing delay.
    ///
    /// All deferred deliveries share one queue, so replies land in the order
    /// their messages were submitted.
    fn deliver_after_typing(&self, cmd: ChatCommand) {
        let due = Instant::now() + self.settings.typing_delay;
        if self.typing.send((due, cmd)).is_err() {
            warn!("Typing queue closed, dropping reply");
        }
    }

    #[instrument(skip(self, cmd), fields(session = %self.session.id()))]
    fn handle_command(&mut self, cmd: ChatCommand) {
        match cmd {
            ChatCommand::Open { responder } => {
                let greeting = self.session.open().cloned();
                let _ = responder.send(greeting);
            }
            ChatCommand::Close => self.session.close(),
            ChatCommand::Submit { text, responder } => match self.session.submit(&text) {
                None => {
                    let _ = responder.send(Ok(None));
                }
                Some(reply) => self.deliver_after_typing(ChatCommand::Deliver { reply, responder }),
            },
            ChatCommand::Deliver { reply, responder } => {
                let delivered = self.session.deliver(reply);
                if let Some(effect) = delivered.effect {
                    debug!(effect = %effect.effect, delay_ms = effect.delay.as_millis() as u64, "Scheduling side effect");
                    self.scheduler.schedule(effect);
                }
                let _ = responder.send(Ok(Some(delivered.message)));
            }
            ChatCommand::Preview { text, responder } => {
                let _ = responder.send(self.session.preview(&text));
            }
            ChatCommand::Transcript { responder } => {
                let _ = responder.send(self.session.log().messages().to_vec());
            }
            ChatCommand::SubmitContact {
                submission,
                responder,
            } => self.handle_contact(submission, responder),
            ChatCommand::ContactFinished { result, responder } => {
                let notice = self.form.finish(&result);
                if result.is_ok() {
                    self.session.say(RELAY_CONFIRMATION);
                }
                let _ = responder.send(Ok(notice));
            }
            ChatCommand::ToggleTheme { responder } => {
                let current = self.session.state().theme;
                let result = preferences::toggle_theme(self.store.as_mut(), current);
                if let Ok(next) = result {
                    self.session.state_mut().theme = next;
                    info!(theme = next.as_str(), "Theme toggled");
                }
                let _ = responder.send(result);
            }
            ChatCommand::RecordConsent { choice, responder } => {
                let result = preferences::record_cookie_consent(self.store.as_mut(), choice);
                if result.is_ok() {
                    self.session.state_mut().cookie_consent = Some(choice);
                }
                let _ = responder.send(result);
            }
            ChatCommand::Shutdown => {}
        }
    }

    fn handle_contact(
        &mut self,
        submission: ContactSubmission,
        responder: oneshot::Sender<Result<Notice, AppError>>,
    ) {
        if let Err(e) = submission.validate() {
            let _ = responder.send(Err(e.into()));
            return;
        }

        match self.settings.contact.clone() {
            ContactChannel::Mailto { recipient } => {
                let link = mailto_link(&recipient, &submission);
                self.scheduler.host().open_mailto(&link);
                self.session.say(MAILTO_CONFIRMATION);
                let _ = responder.send(Ok(Notice::success(MAILTO_NOTICE)));
            }
            ContactChannel::Relay(relay) => {
                if !self.form.begin_submit() {
                    let _ = responder.send(Err(AppError::Validation(
                        "A contact submission is already in progress".to_string(),
                    )));
                    return;
                }
                let weak = self.self_sender.clone();
                let relay_timeout = self.settings.relay_timeout;
                tokio::spawn(async move {
                    let result = match timeout(relay_timeout, relay.submit(&submission)).await {
                        Ok(result) => result,
                        Err(elapsed) => Err(elapsed.into()),
                    };
                    if let Err(e) = &result {
                        error!("Contact relay failed: {}", e);
                    }
                    if let Some(sender) = weak.upgrade() {
                        let _ = sender
                            .send(ChatCommand::ContactFinished { result, responder })
                            .await;
                    }
                });
            }
        }
    }
}

/// Releases deferred commands in FIFO order once each is due.
async fn run_typing_queue(
    mut queue: mpsc::UnboundedReceiver<(Instant, ChatCommand)>,
    actor: mpsc::WeakSender<ChatCommand>,
) {
    while let Some((due, cmd)) = queue.recv().await {
        sleep_until(due).await;
        let Some(sender) = actor.upgrade() else {
            debug!("Chat actor gone, dropping deferred command");
            break;
        };
        if sender.send(cmd).await.is_err() {
            warn!("Chat actor stopped before a deferred command arrived");
            break;
        }
    }
}
