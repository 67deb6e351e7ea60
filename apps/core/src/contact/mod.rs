//! Contact form plumbing: `mailto:` links, the form relay, submit state.

pub mod form;
pub mod mailto;
pub mod relay;

pub use form::{ContactForm, Notice, NoticeKind};
pub use mailto::mailto_link;
pub use relay::{RelayClient, RelayReceipt, RELAY_TIMEOUT};
