//! Chat session and transcript.

pub mod session;
pub mod transcript;

pub use session::{ChatSession, Delivered, PendingReply, SessionState};
pub use transcript::{escape_html, MessageLog};
