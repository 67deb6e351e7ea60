use crate::contact::RelayReceipt;
use crate::error::AppError;
use crate::models::ContactSubmission;
use async_trait::async_trait;

/// Defines the page the chat is embedded in.
///
/// The dispatcher only describes side effects; a `HostPage` carries them out.
/// Implementations must tolerate missing targets without failing.
pub trait HostPage: Send + Sync + 'static {
    /// Changes location to a relative path.
    fn navigate(&self, path: &str);

    /// Brings a section into view. Returns `false` when the section does not exist.
    fn scroll_to(&self, section_id: &str) -> bool;

    /// Reveals the page's contact modal.
    fn open_contact_form(&self);

    /// Hands a `mailto:` link to the visitor's mail client.
    fn open_mailto(&self, link: &str);
}

/// Defines the public interface of a contact-form relay.
///
/// This trait abstracts the delivery service so tests can swap in a mock.
#[async_trait]
pub trait ContactRelay: Send + Sync + 'static {
    /// Sends one submission. Called once per attempt; never retried internally.
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayReceipt, AppError>;
}
