pub mod chat;
pub mod effects;
pub mod messages;
pub mod traits;
