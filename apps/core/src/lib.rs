//! Site concierge chat core.
//!
//! A rule-ordered response dispatcher for a marketing-site chat widget, the
//! append-only transcript it feeds, and the single-threaded actor that plays
//! the part of the page's event loop (typing delay, delayed side effects,
//! contact form, theme and cookie preferences).

pub mod actors;
pub mod chat;
pub mod config;
pub mod contact;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod preferences;
pub mod telemetry;

pub use error::AppError;

#[cfg(test)]
mod tests;
