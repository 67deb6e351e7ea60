//! Executes delayed side effects against the host page.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, warn};

use super::traits::HostPage;
use crate::dispatcher::{ScheduledEffect, SideEffect};

/// What happened when an effect fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Performed,
    /// The target section does not exist; nothing happened
    TargetMissing,
}

/// Runs one effect right now.
pub fn perform<H: HostPage + ?Sized>(host: &H, effect: &SideEffect) -> EffectOutcome {
    match effect {
        SideEffect::Navigate { path } => {
            host.navigate(path);
            EffectOutcome::Performed
        }
        SideEffect::ScrollTo { section_id } => {
            if host.scroll_to(section_id) {
                EffectOutcome::Performed
            } else {
                warn!("Scroll target '{}' not found, skipping", section_id);
                EffectOutcome::TargetMissing
            }
        }
        SideEffect::OpenContactForm => {
            host.open_contact_form();
            EffectOutcome::Performed
        }
    }
}

/// Fire-and-forget timers for scheduled effects.
///
/// Each scheduled effect runs exactly once after its delay. Timers are not
/// cancellable; an effect still pending when the runtime shuts down is lost.
pub struct EffectScheduler<H: HostPage> {
    host: Arc<H>,
}

impl<H: HostPage> Clone for EffectScheduler<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<H: HostPage> EffectScheduler<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn schedule(&self, scheduled: ScheduledEffect) -> JoinHandle<EffectOutcome> {
        let host = Arc::clone(&self.host);
        tokio::spawn(async move {
            sleep(scheduled.delay).await;
            let outcome = perform(host.as_ref(), &scheduled.effect);
            info!(effect = %scheduled.effect, ?outcome, "Side effect fired");
            outcome
        })
    }
}
